//! Optional input capabilities
//!
//! Voice dictation and image search depend on hardware or a desktop the
//! terminal may not have. The controller only talks to these traits, and
//! the default providers report themselves unavailable.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("Voice search is not supported on this system")]
    VoiceUnsupported,

    #[error("Image search is not supported on this system")]
    ImageUnsupported,

    #[error("Voice recognition failed: {0}")]
    Recognition(String),
}

pub trait VoiceInputProvider {
    fn is_available(&self) -> bool;

    /// Capture one utterance and return its transcript
    fn listen(&mut self) -> Result<String, CapabilityError>;
}

pub trait ImageInputProvider {
    fn is_available(&self) -> bool;

    /// Ask the user for an image; `Ok(None)` means they cancelled
    fn pick_image(&mut self) -> Result<Option<PathBuf>, CapabilityError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoVoiceInput;

impl VoiceInputProvider for NoVoiceInput {
    fn is_available(&self) -> bool {
        false
    }

    fn listen(&mut self) -> Result<String, CapabilityError> {
        Err(CapabilityError::VoiceUnsupported)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoImageInput;

impl ImageInputProvider for NoImageInput {
    fn is_available(&self) -> bool {
        false
    }

    fn pick_image(&mut self) -> Result<Option<PathBuf>, CapabilityError> {
        Err(CapabilityError::ImageUnsupported)
    }
}
