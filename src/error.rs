/// Error while loading carousel options or page markup.
///
/// Navigation itself never fails; only the inputs a host reads from disk do.
#[derive(Debug, Clone)]
pub struct CarouselError {
    pub message: String,
    pub phase: &'static str,
}

impl CarouselError {
    pub fn new(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phase,
        }
    }
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for CarouselError {}
