use crate::error::ResourceError;
use std::fmt;

/// A [`ResourceError`] attached to the instantiation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub interface: String,
    /// Position of the instantiation in the interface's mix-in list
    pub index: usize,
    pub template: String,
    pub error: ResourceError,
}

impl Diagnostic {
    pub fn new(
        interface: impl Into<String>,
        index: usize,
        template: impl Into<String>,
        error: ResourceError,
    ) -> Self {
        Diagnostic {
            interface: interface.into(),
            index,
            template: template.into(),
            error,
        }
    }

    /// e.g. `Things[0] ResourceOperations`
    pub fn location(&self) -> String {
        format!("{}[{}] {}", self.interface, self.index, self.template)
    }

    pub fn kind(&self) -> &'static str {
        self.error.kind()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind(), self.location(), self.error)
    }
}

pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    eprintln!(
        "\n❌ Resource model has {} defect(s):\n",
        diagnostics.len()
    );
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
    eprintln!("\nAffected instantiations produced no routes.\n");
}

/// Turn a non-empty diagnostic list into an error.
///
/// # Errors
///
/// Returns an error summarising every diagnostic when the list is not empty.
pub fn ensure_clean(diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }
    let lines: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    anyhow::bail!(
        "{} resource modeling defect(s):\n{}",
        diagnostics.len(),
        lines.join("\n")
    )
}
