use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Environment, parser::core::parse_line, reduction::reduce,
        value::core::Value,
    },
};

/// A line-oriented interpreter session.
///
/// The session owns the environment, so every binding made by one line is
/// visible to the lines after it. Errors never end the session: a failed
/// line is reported and the next one is processed as usual.
#[derive(Debug)]
pub struct Session {
    environment: Environment,
    line:        usize,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session with a freshly seeded environment.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(),
               line:        0, }
    }

    /// The session's environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Parses, reduces and evaluates a single statement.
    ///
    /// # Returns
    /// `Some(value)` for a statement that leaves a value, `None` for a bare
    /// declaration.
    ///
    /// # Errors
    /// Returns the parse or runtime error of the statement. Bindings made
    /// before a runtime error are kept.
    ///
    /// # Example
    /// ```
    /// use diophant::session::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.process_line("x := 1 / 3").unwrap().unwrap().to_string(), "1/3");
    /// assert_eq!(session.process_line("x + x").unwrap().unwrap().to_string(), "2/3");
    /// assert!(session.process_line("x := 2").is_err());
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn process_line(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let statement = parse_line(source)?;
        reduce(&statement, &mut self.environment)
    }

    /// Processes one input line and formats what should be printed for it.
    ///
    /// Every call counts as one line, blank lines included, so error messages
    /// carry the line number within the input.
    ///
    /// # Returns
    /// - `Some("result: ...")` for a statement with a value.
    /// - `Some("error on line N: ...")` for a failed statement.
    /// - `None` for a blank line or a bare declaration.
    ///
    /// # Example
    /// ```
    /// use diophant::session::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.render_line("1 + 2 * 3").as_deref(), Some("result: 7"));
    /// assert_eq!(session.render_line(""), None);
    /// assert_eq!(session.render_line("y").as_deref(),
    ///            Some("error on line 3: Undefined symbol 'y'."));
    /// ```
    pub fn render_line(&mut self, source: &str) -> Option<String> {
        self.line += 1;
        if source.trim().is_empty() {
            return None;
        }

        match self.process_line(source) {
            Ok(Some(value)) => Some(format!("result: {value}")),
            Ok(None) => None,
            Err(error) => {
                debug!(line = self.line, %error, "statement failed");
                Some(format!("error on line {}: {error}", self.line))
            },
        }
    }

    /// Reads `input` line by line until it ends, writing one output line per
    /// result or error.
    ///
    /// # Errors
    /// Only I/O failures end the loop early.
    ///
    /// # Example
    /// ```
    /// use diophant::session::Session;
    ///
    /// let mut output = Vec::new();
    /// Session::new().run("a := 2\n\na ^ 10\na := 3\n".as_bytes(), &mut output)
    ///               .unwrap();
    ///
    /// let output = String::from_utf8(output).unwrap();
    /// assert_eq!(output,
    ///            "result: 2\nresult: 1024\nerror on line 4: Symbol 'a' is already defined.\n");
    /// ```
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), Error> {
        for line in input.lines() {
            if let Some(rendered) = self.render_line(&line?) {
                writeln!(output, "{rendered}")?;
            }
        }
        Ok(())
    }
}
