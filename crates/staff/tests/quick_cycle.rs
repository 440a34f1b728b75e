use shiftboard_staff::{Command, EffectiveShift, Query, ShiftType, VisualType};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_quick_cycle_on_a_natural_working_day() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let id = command.create(helpers::five_two_input("Alice")).await?;
    let from = shiftboard_shared::parse_date("2024-01-01")?;
    let to = shiftboard_shared::parse_date("2024-01-31")?;

    // 2024-01-02 is a working pattern day, so the cycle starts at Half.
    let state = command.quick_cycle(&id, "2024-01-02").await?;
    assert_eq!(state.shift_type, EffectiveShift::Half);
    assert_eq!(state.visual, VisualType::Hollow);

    let rows = query.overrides_between(from, to).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].start_time.as_deref(), Some("08:00"));
    assert_eq!(rows[0].end_time.as_deref(), Some("13:00"));
    assert_eq!(
        rows[0].shift_type.as_ref().map(|t| t.0.to_owned()),
        Some(ShiftType::Half)
    );

    let state = command.quick_cycle(&id, "2024-01-02").await?;
    assert_eq!(state.shift_type, EffectiveShift::Off);
    assert!(!state.is_working);

    let rows = query.overrides_between(from, to).await?;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_day_off);

    // Third application returns to the pattern's natural state and leaves no
    // override behind.
    let state = command.quick_cycle(&id, "2024-01-02").await?;
    assert_eq!(state.shift_type, EffectiveShift::Normal);
    assert!(state.is_working);
    assert_eq!(state.label, "Normal Shift");

    assert!(query.overrides_between(from, to).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_quick_cycle_forces_normal_on_a_pattern_off_day() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let id = command.create(helpers::five_two_input("Alice")).await?;
    let from = shiftboard_shared::parse_date("2024-01-01")?;
    let to = shiftboard_shared::parse_date("2024-01-31")?;

    // 2024-01-06 is a pattern off day: not-working advances to Normal, which
    // has to be forced with an override.
    let state = command.quick_cycle(&id, "2024-01-06").await?;
    assert_eq!(state.shift_type, EffectiveShift::Normal);
    assert_eq!(state.label, "Normal Shift (Manual)");

    let rows = query.overrides_between(from, to).await?;
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].is_day_off);
    assert_eq!(
        rows[0].shift_type.as_ref().map(|t| t.0.to_owned()),
        Some(ShiftType::Normal)
    );

    let state = command.quick_cycle(&id, "2024-01-06").await?;
    assert_eq!(state.shift_type, EffectiveShift::Half);

    let state = command.quick_cycle(&id, "2024-01-06").await?;
    assert_eq!(state.shift_type, EffectiveShift::Off);

    Ok(())
}
