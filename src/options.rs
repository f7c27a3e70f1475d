//! Shoe configuration options.

use crate::error::ConfigError;

/// Configuration options for a shoe.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::ShoeOptions;
///
/// let options = ShoeOptions::default().with_decks(2);
/// assert_eq!(options.decks, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShoeOptions {
    /// Number of full decks in the shoe.
    pub decks: u8,
}

impl Default for ShoeOptions {
    fn default() -> Self {
        Self { decks: 6 }
    }
}

impl ShoeOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::ShoeOptions;
    ///
    /// let options = ShoeOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Checks that the options describe a usable shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if `decks` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        Ok(())
    }
}
