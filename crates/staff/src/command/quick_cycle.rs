use crate::{
    EffectiveShift, HALF_SHIFT_WINDOW, SetOverrideInput, ShiftState, ShiftType, next_quick_state,
    shift_state,
};

impl super::Command {
    /// Three-way manual toggle for one roster cell: Normal -> Half -> Off ->
    /// Normal. Advancing to Normal clears the override when the underlying
    /// pattern already yields a working Normal day; otherwise the Normal
    /// state is forced with an override of its own.
    pub async fn quick_cycle(
        &self,
        staff_id: &str,
        date: &str,
    ) -> shiftboard_shared::Result<ShiftState> {
        let staff = self.staff_required(staff_id).await?;
        let day = shiftboard_shared::parse_date(date)?;
        let rotation = staff.rotation()?;

        let entries = self.override_entries(staff_id, date).await?;
        let current = shift_state(&rotation, &entries, day);

        match next_quick_state(&current) {
            EffectiveShift::Half => {
                let (start, end) = HALF_SHIFT_WINDOW;
                self.set_override(
                    staff_id,
                    SetOverrideInput {
                        date: date.to_owned(),
                        start_time: Some(start.to_owned()),
                        end_time: Some(end.to_owned()),
                        is_day_off: false,
                        shift_type: Some(ShiftType::Half),
                    },
                )
                .await?;
            }
            EffectiveShift::Off => {
                self.set_override(
                    staff_id,
                    SetOverrideInput {
                        date: date.to_owned(),
                        start_time: None,
                        end_time: None,
                        is_day_off: true,
                        shift_type: None,
                    },
                )
                .await?;
            }
            EffectiveShift::Normal => {
                if rotation.is_working(day) {
                    self.clear_override(staff_id, date).await?;
                } else {
                    self.set_override(
                        staff_id,
                        SetOverrideInput {
                            date: date.to_owned(),
                            start_time: None,
                            end_time: None,
                            is_day_off: false,
                            shift_type: Some(ShiftType::Normal),
                        },
                    )
                    .await?;
                }
            }
        }

        let entries = self.override_entries(staff_id, date).await?;

        Ok(shift_state(&rotation, &entries, day))
    }
}
