use crate::errors::RenderError;
use std::fmt;
use std::str::FromStr;

/// Formatos que sabe producir el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
  Png,
  Pdf,
  Svg,
  /// Texto DOT tal cual; no necesita Graphviz.
  Dot,
}

impl OutputFormat {
  pub const ALL: [OutputFormat; 4] = [OutputFormat::Png, OutputFormat::Pdf, OutputFormat::Svg, OutputFormat::Dot];

  pub fn extension(self) -> &'static str {
    match self {
      OutputFormat::Png => "png",
      OutputFormat::Pdf => "pdf",
      OutputFormat::Svg => "svg",
      OutputFormat::Dot => "dot",
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

impl FromStr for OutputFormat {
  type Err = RenderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase();
    Self::ALL.into_iter()
             .find(|f| f.extension() == wanted)
             .ok_or_else(|| RenderError::UnknownFormat(s.to_string()))
  }
}
