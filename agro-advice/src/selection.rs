//! The active image selection and the URL its preview is shown from.

use crate::error::ValidationError;
use crate::submission::{check_image, ImageSource};

/// Image chosen by drop or picker.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<F> {
    image: Option<F>,
    preview_url: Option<String>,
}

impl<F> Default for Selection<F> {
    fn default() -> Self {
        Self {
            image: None,
            preview_url: None,
        }
    }
}

impl<F: ImageSource> Selection<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a dropped or picked file; `None` is a drop that carried no file.
    ///
    /// A rejected file leaves the current image and preview untouched and
    /// `preview` is never called for it. On success the previous preview URL
    /// is returned so the caller can release it.
    pub fn offer(
        &mut self,
        candidate: Option<F>,
        preview: impl FnOnce(&F) -> Option<String>,
    ) -> Result<Option<String>, ValidationError> {
        let image = candidate.ok_or_else(|| ValidationError::NotAnImage {
            mime_type: String::new(),
        })?;
        check_image(&image)?;
        let url = preview(&image);
        self.image = Some(image);
        Ok(std::mem::replace(&mut self.preview_url, url))
    }

    pub fn image(&self) -> Option<&F> {
        self.image.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::tests::{jpeg, FakeImage};
    use std::cell::Cell;

    fn url_for(image: &FakeImage) -> Option<String> {
        Some(format!("blob:{}", image.name))
    }

    #[test]
    fn test_accepted_image_is_previewed() {
        let mut selection = Selection::new();
        let old = selection.offer(Some(jpeg()), url_for).unwrap();
        assert_eq!(old, None);
        assert_eq!(selection.image(), Some(&jpeg()));
        assert_eq!(selection.preview_url(), Some("blob:leaf.jpg"));
    }

    #[test]
    fn test_rejected_drop_leaves_selection_empty() {
        let previewed = Cell::new(false);
        let mut selection = Selection::<FakeImage>::new();

        let err = selection
            .offer(None, |_| {
                previewed.set(true);
                None
            })
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotAnImage { .. }));

        let pdf = FakeImage {
            name: "notes.pdf",
            mime: "application/pdf",
        };
        let err = selection
            .offer(Some(pdf), |_| {
                previewed.set(true);
                None
            })
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotAnImage {
                mime_type: "application/pdf".into()
            }
        );

        assert!(!previewed.get());
        assert!(selection.image().is_none());
        assert!(selection.preview_url().is_none());
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut selection = Selection::new();
        selection.offer(Some(jpeg()), url_for).unwrap();

        let text = FakeImage {
            name: "readme.txt",
            mime: "text/plain",
        };
        assert!(selection.offer(Some(text), url_for).is_err());
        assert_eq!(selection.image(), Some(&jpeg()));
        assert_eq!(selection.preview_url(), Some("blob:leaf.jpg"));
    }

    #[test]
    fn test_replacing_returns_old_preview() {
        let mut selection = Selection::new();
        selection.offer(Some(jpeg()), url_for).unwrap();
        let png = FakeImage {
            name: "leaf.png",
            mime: "image/png",
        };
        let old = selection.offer(Some(png), url_for).unwrap();
        assert_eq!(old.as_deref(), Some("blob:leaf.jpg"));
        assert_eq!(selection.preview_url(), Some("blob:leaf.png"));
    }
}
