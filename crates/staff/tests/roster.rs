use shiftboard_staff::{Command, CreateStaffInput, EffectiveShift, Query, SetOverrideInput};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_roster_assembles_days_and_cells() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let alice = command.create(helpers::five_two_input("Alice")).await?;
    command
        .create(CreateStaffInput {
            display_order: 1,
            ..helpers::five_two_input("Bob")
        })
        .await?;

    command
        .set_override(
            &alice,
            SetOverrideInput {
                date: "2024-01-03".to_owned(),
                start_time: None,
                end_time: None,
                is_day_off: true,
                shift_type: None,
            },
        )
        .await?;

    let from = shiftboard_shared::parse_date("2024-01-01")?;
    let to = shiftboard_shared::parse_date("2024-01-07")?;
    let roster = query.roster(from, to).await?;

    assert_eq!(roster.days.len(), 7);
    assert_eq!(roster.days[0].iso, "2024-01-01");
    assert_eq!(roster.days[0].weekday, "Monday");
    assert_eq!(roster.days[6].weekday, "Sunday");

    assert_eq!(roster.rows.len(), 2);
    assert_eq!(roster.rows[0].staff.name, "Alice");
    assert_eq!(roster.rows[1].staff.name, "Bob");

    let alice_cells = &roster.rows[0].cells;
    assert_eq!(alice_cells.len(), 7);

    // Monday and Tuesday follow the pattern with the default full-day window.
    assert_eq!(alice_cells[0].state.shift_type, EffectiveShift::Normal);
    assert_eq!(alice_cells[0].window, "08:00 - 17:00");

    // Wednesday carries the manual day off.
    assert!(!alice_cells[2].state.is_working);
    assert_eq!(alice_cells[2].state.label, "Day Off (Manual)");
    assert_eq!(alice_cells[2].window, "");

    // The weekend is off by pattern.
    assert_eq!(alice_cells[5].state.shift_type, EffectiveShift::Off);
    assert_eq!(alice_cells[6].state.shift_type, EffectiveShift::Off);

    // Bob has no override, so Wednesday stays a working day for him.
    assert!(roster.rows[1].cells[2].state.is_working);

    Ok(())
}

#[tokio::test]
async fn test_roster_with_an_empty_range_day() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    command.create(helpers::five_two_input("Alice")).await?;

    let day = shiftboard_shared::parse_date("2024-01-06")?;
    let roster = query.roster(day, day).await?;

    assert_eq!(roster.days.len(), 1);
    assert_eq!(roster.rows[0].cells.len(), 1);
    assert!(!roster.rows[0].cells[0].state.is_working);

    Ok(())
}
