use shiftboard_staff::{Command, Query, SetOverrideInput, ShiftType};
use temp_dir::TempDir;

mod helpers;

fn half_day(date: &str) -> SetOverrideInput {
    SetOverrideInput {
        date: date.to_owned(),
        start_time: Some("08:00".to_owned()),
        end_time: Some("13:00".to_owned()),
        is_day_off: false,
        shift_type: Some(ShiftType::Half),
    }
}

#[tokio::test]
async fn test_set_override_upserts_one_row_per_date() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let id = command.create(helpers::five_two_input("Alice")).await?;

    command.set_override(&id, half_day("2024-01-02")).await?;
    command
        .set_override(
            &id,
            SetOverrideInput {
                date: "2024-01-02".to_owned(),
                start_time: None,
                end_time: None,
                is_day_off: true,
                shift_type: None,
            },
        )
        .await?;

    let from = shiftboard_shared::parse_date("2024-01-01")?;
    let to = shiftboard_shared::parse_date("2024-01-31")?;
    let rows = query.overrides_between(from, to).await?;

    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_day_off);
    assert!(rows[0].shift_type.is_none());

    Ok(())
}

#[tokio::test]
async fn test_set_override_requires_a_known_staff_member() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool);

    let result = command
        .set_override("01JMISSING0000000000000000", half_day("2024-01-02"))
        .await;

    assert!(matches!(result, Err(shiftboard_shared::Error::NotFound)));

    Ok(())
}

#[tokio::test]
async fn test_set_override_validates_times() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool);

    let id = command.create(helpers::five_two_input("Alice")).await?;

    let malformed = command
        .set_override(
            &id,
            SetOverrideInput {
                start_time: Some("8am".to_owned()),
                ..half_day("2024-01-02")
            },
        )
        .await;
    assert!(malformed.is_err());

    let lonely_start = command
        .set_override(
            &id,
            SetOverrideInput {
                end_time: None,
                ..half_day("2024-01-02")
            },
        )
        .await;
    assert!(lonely_start.is_err());

    Ok(())
}

#[tokio::test]
async fn test_clear_override_is_a_noop_when_absent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(dir.child("db.sqlite3")).await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let id = command.create(helpers::five_two_input("Alice")).await?;

    command.clear_override(&id, "2024-01-02").await?;

    command.set_override(&id, half_day("2024-01-02")).await?;
    command.clear_override(&id, "2024-01-02").await?;

    let from = shiftboard_shared::parse_date("2024-01-01")?;
    let to = shiftboard_shared::parse_date("2024-01-31")?;
    assert!(query.overrides_between(from, to).await?.is_empty());

    Ok(())
}
