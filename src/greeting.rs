//! Greeting templates and the `greet` function.
//!
//! Rendering is pure: the name is substituted verbatim, with no
//! trimming, escaping, or case normalization.

/// Name greeted when none is supplied on the command line.
pub const DEFAULT_NAME: &str = "world";

/// The fixed pattern a name is substituted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Template {
    /// `Hello, {name}!`
    #[default]
    Standard,
    /// `Well hello there, {name}! What a fine day.`
    FineDay,
}

impl Template {
    /// Renders the template with `name` inserted verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use greeter::Template;
    ///
    /// assert_eq!(Template::Standard.render("Ada"), "Hello, Ada!");
    /// assert_eq!(
    ///     Template::FineDay.render("Ada"),
    ///     "Well hello there, Ada! What a fine day."
    /// );
    /// ```
    #[must_use]
    pub fn render(self, name: &str) -> String {
        match self {
            Self::Standard => format!("Hello, {name}!"),
            Self::FineDay => format!("Well hello there, {name}! What a fine day."),
        }
    }
}

/// Produces greetings from a single template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greeter {
    template: Template,
}

impl Greeter {
    /// Creates a greeter using the standard template.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            template: Template::Standard,
        }
    }

    /// Creates a greeter using the given template.
    #[must_use]
    pub const fn with_template(template: Template) -> Self {
        Self { template }
    }

    /// Returns the template this greeter renders.
    #[must_use]
    pub const fn template(&self) -> Template {
        self.template
    }

    /// Greets `name`.
    #[must_use]
    pub fn greet(&self, name: &str) -> String {
        self.template.render(name)
    }
}

/// Greets `name` with the standard template.
///
/// # Examples
///
/// ```
/// assert_eq!(greeter::greet("Jules"), "Hello, Jules!");
/// assert_eq!(greeter::greet(""), "Hello, !");
/// ```
#[must_use]
pub fn greet(name: &str) -> String {
    Greeter::new().greet(name)
}
