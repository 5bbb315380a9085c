/// A vehicle and the place it was last reported at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: String,
    location: String,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Replace the current location. No validation is done.
    pub fn update_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// `(id, location)` pair for display.
    pub fn describe(&self) -> (&str, &str) {
        (&self.id, &self.location)
    }
}
