use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Staff {
    Table,
    Id,
    Name,
    Role,
    Status,
    ShiftType,
    CycleStart,
    PatternOn,
    PatternOff,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum StaffOverride {
    Table,
    StaffId,
    Date,
    StartTime,
    EndTime,
    IsDayOff,
    ShiftType,
}
