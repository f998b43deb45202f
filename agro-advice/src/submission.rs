//! Validated image + city pairs ready to be sent.

use crate::error::{StoreError, ValidationError};
use crate::store::CityStore;
use agro_utils::mime;

/// A file picked or dropped by the user.
///
/// Implemented by the browser `File` wrapper and by the CLI's on-disk image.
pub trait ImageSource {
    fn file_name(&self) -> String;
    /// Declared MIME type, e.g. `image/jpeg`.
    fn mime_type(&self) -> String;
}

/// Accept a selection only when it declares an `image/*` type.
///
/// Applied to both drag-and-drop and picker selections.
pub fn check_image<F: ImageSource>(image: &F) -> Result<(), ValidationError> {
    let mime_type = image.mime_type();
    if mime::is_image(&mime_type) {
        Ok(())
    } else {
        Err(ValidationError::NotAnImage { mime_type })
    }
}

/// One image and one city, both validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    image: F,
    city: String,
}

impl<F: ImageSource> Submission<F> {
    /// Validate the current selection and city input.
    ///
    /// The city is trimmed; an empty result is rejected.
    pub fn new(image: Option<F>, city: &str) -> Result<Self, ValidationError> {
        let image = image.ok_or(ValidationError::MissingImage)?;
        check_image(&image)?;
        let city = city.trim();
        if city.is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        Ok(Self {
            image,
            city: city.to_string(),
        })
    }

    pub fn image(&self) -> &F {
        &self.image
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Remember the city for the next session.
    pub fn persist_city<S: CityStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        store.save(&self.city)
    }
}
