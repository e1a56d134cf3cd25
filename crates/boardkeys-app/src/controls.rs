//! Clicks on the widget's own controls.

use boardkeys_core::{Control, ControlError};

use crate::Driver;

/// Click `control` if it exists and is enabled.
///
/// A disabled control is never clicked.
///
/// # Errors
///
/// Returns [`ControlError::Unavailable`] if the control is missing or
/// disabled.
pub fn click_control<D: Driver>(driver: &D, control: Control) -> Result<(), ControlError> {
    let element = driver.find_control(control).ok_or(ControlError::Unavailable { control })?;
    if !driver.is_enabled(&element) {
        return Err(ControlError::Unavailable { control });
    }

    driver.click(&element);
    Ok(())
}
