//! Sequential business-code generator.
//!
//! Projects and tasks are addressed by human-readable codes such as
//! `PRJ-0042`. A new code is derived from the most recently issued one by
//! incrementing its numeric suffix.

use crate::error::CoreError;

/// Renders `{prefix}{separator}{counter:0width}` codes.
///
/// The counter is zero-padded to `width` digits and keeps growing past that
/// width instead of wrapping.
///
/// # Examples
///
/// ```
/// use hr_core::code_generator::CodeGenerator;
///
/// let projects = CodeGenerator::project();
/// assert_eq!(projects.next_code(None).unwrap(), "PRJ-0001");
/// assert_eq!(projects.next_code(Some("PRJ-0009")).unwrap(), "PRJ-0010");
/// assert_eq!(projects.next_code(Some("PRJ-9999")).unwrap(), "PRJ-10000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenerator {
    prefix: String,
    separator: String,
    width: usize,
}

impl CodeGenerator {
    pub const DEFAULT_SEPARATOR: &'static str = "-";
    pub const PROJECT_PREFIX: &'static str = "PRJ";
    pub const PROJECT_WIDTH: usize = 4;
    pub const TASK_PREFIX: &'static str = "TSK";
    pub const TASK_WIDTH: usize = 5;

    pub fn new(prefix: impl Into<String>, separator: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
            width,
        }
    }

    /// Default generator for project codes (`PRJ-0001`).
    pub fn project() -> Self {
        Self::new(
            Self::PROJECT_PREFIX,
            Self::DEFAULT_SEPARATOR,
            Self::PROJECT_WIDTH,
        )
    }

    /// Default generator for task codes (`TSK-00001`).
    pub fn task() -> Self {
        Self::new(Self::TASK_PREFIX, Self::DEFAULT_SEPARATOR, Self::TASK_WIDTH)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render the code for a given counter value.
    pub fn render(&self, counter: u64) -> String {
        format!(
            "{}{}{:0width$}",
            self.prefix,
            self.separator,
            counter,
            width = self.width
        )
    }

    /// Derive the code that follows `previous`.
    ///
    /// `None` (or a blank code) starts the sequence at 1. Only the trailing
    /// run of ASCII digits of `previous` is read, so a code issued under an
    /// older prefix still advances the sequence.
    pub fn next_code(&self, previous: Option<&str>) -> Result<String, CoreError> {
        let previous = previous.map(str::trim).filter(|code| !code.is_empty());

        let counter = match previous {
            None => 0,
            Some(code) => trailing_counter(code)?,
        };

        let next = counter.checked_add(1).ok_or_else(|| {
            CoreError::validation(format!("code counter overflow after '{}'", self.render(counter)))
        })?;

        Ok(self.render(next))
    }
}

/// Parse the trailing ASCII digits of `code`.
fn trailing_counter(code: &str) -> Result<u64, CoreError> {
    let digit_count = code
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_count == 0 {
        return Err(CoreError::validation(format!(
            "previous code '{code}' has no numeric suffix"
        )));
    }

    // ASCII digits are single bytes, so this split is on a char boundary.
    code[code.len() - digit_count..].parse().map_err(|_| {
        CoreError::validation(format!(
            "previous code '{code}' exceeds the counter range"
        ))
    })
}
