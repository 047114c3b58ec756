use std::path::Path;

use log::error;
use woof_core::capacity::suggest_dimensions;
use woof_core::{Media, WoofError};

use crate::CliResult;

pub mod convert;
pub mod embed;
pub mod extract;
pub mod extract_raw;
pub mod info;

/// Tells the user how large a carrier would have to be before the error bubbles up
fn hint_on_capacity<T>(result: CliResult<T>, media: &Path) -> CliResult<T> {
    if let Err(WoofError::CapacityExceeded { required, .. }) = &result {
        if let Ok((width, height)) = Media::dimensions(media) {
            let (w, h) = suggest_dimensions(*required, width, height);
            error!("{media:?} is {width}x{height}, a carrier of at least {w}x{h} pixels is needed");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pass_the_capacity_error_through_unchanged() {
        let result: CliResult<()> = Err(WoofError::CapacityExceeded {
            required: 320,
            available: 300,
        });

        assert!(matches!(
            hint_on_capacity(result, Path::new("missing_carrier.png")),
            Err(WoofError::CapacityExceeded {
                required: 320,
                available: 300
            })
        ));
        assert!(hint_on_capacity(Ok(()), Path::new("missing_carrier.png")).is_ok());
    }
}
