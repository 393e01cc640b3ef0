//! Output formats.
//!
//! Renders a list of [`EnvVar`]s as text. Every renderer is pure: the same
//! input always produces the same bytes, one entry per variable, in input
//! order. Values are written verbatim with no quoting or escaping.

use std::fmt;
use std::str::FromStr;

use crate::core::constants::EB_HEADER;
use crate::core::domain::EnvVar;
use crate::error::UnknownFormat;

/// Supported output formats.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Docker env-file lines: `NAME=VALUE`
    #[default]
    Docker,
    /// Shell export statements: `export NAME=VALUE`
    Exports,
    /// Elastic Beanstalk `option_settings` block
    #[value(name = "elasticbeanstalk")]
    ElasticBeanstalk,
}

impl Format {
    /// All formats, in CLI order.
    pub const ALL: [Format; 3] = [Format::Docker, Format::Exports, Format::ElasticBeanstalk];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Exports => "exports",
            Self::ElasticBeanstalk => "elasticbeanstalk",
        }
    }

    /// Render variables in this format.
    pub fn render(&self, vars: &[EnvVar]) -> String {
        render(vars, *self)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Render variables in the given format.
pub fn render(vars: &[EnvVar], format: Format) -> String {
    let mut out = String::new();

    match format {
        Format::Docker => {
            for var in vars {
                out.push_str(&format!("{}={}\n", var.name(), var.value()));
            }
        }
        Format::Exports => {
            for var in vars {
                out.push_str(&format!("export {}={}\n", var.name(), var.value()));
            }
        }
        Format::ElasticBeanstalk => {
            out.push_str(EB_HEADER);
            out.push('\n');
            for var in vars {
                out.push_str(&format!(" - option_name: {}\n", var.name()));
                // Embedded double quotes are left as-is.
                out.push_str(&format!("   value: \"{}\"\n", var.value()));
            }
        }
    }

    out
}
