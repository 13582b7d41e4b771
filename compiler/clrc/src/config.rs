//! Driver configuration and command-line parsing.

use std::path::PathBuf;

use clr_symbols::ProviderConfig;

use crate::error::DriverError;

/// Packages every source file imports implicitly.
pub const DEFAULT_IMPORTS: &[&str] = &[
    "kotlin",
    "kotlin.annotation",
    "kotlin.collections",
    "kotlin.comparisons",
    "kotlin.io",
    "kotlin.ranges",
    "kotlin.sequences",
    "kotlin.text",
    "kotlin.clr",
    "System",
    "System.Collections.Generic",
    "System.IO",
    "System.Linq",
    "System.Net.Http",
    "System.Threading",
    "System.Threading.Tasks",
];

/// Extension of source files collected from source roots.
pub const SOURCE_EXTENSION: &str = "kt";

#[derive(Clone, Debug)]
pub struct CompilerConfig {
    pub module_name: String,
    /// JSON assembly descriptions.
    pub assemblies: Vec<PathBuf>,
    pub source_roots: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub provider: ProviderConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            module_name: "main".to_owned(),
            assemblies: Vec::new(),
            source_roots: Vec::new(),
            output_dir: None,
            provider: ProviderConfig::default(),
        }
    }
}

impl CompilerConfig {
    /// Parse `check` flags. Both `--flag value` and `--flag=value` work.
    pub fn from_args(args: &[String]) -> Result<Self, DriverError> {
        let mut config = CompilerConfig::default();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
                _ => (arg, None),
            };

            let mut value = || -> Result<String, DriverError> {
                if let Some(value) = inline {
                    return Ok(value.to_owned());
                }
                i += 1;
                args.get(i)
                    .cloned()
                    .ok_or_else(|| DriverError::usage(format!("missing value for `{flag}`")))
            };

            match flag {
                "--source" | "-s" => config.source_roots.push(PathBuf::from(value()?)),
                "--assembly" | "-a" => config.assemblies.push(PathBuf::from(value()?)),
                "--module" => config.module_name = value()?,
                "--output" | "-o" => config.output_dir = Some(PathBuf::from(value()?)),
                "--implicit-package" => config.provider.implicit_packages.push(value()?),
                _ if !flag.starts_with('-') => config.source_roots.push(PathBuf::from(arg)),
                _ => return Err(DriverError::usage(format!("unknown option `{arg}`"))),
            }
            i += 1;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn parses_separate_and_inline_values() {
        let config = CompilerConfig::from_args(&args(&[
            "--source",
            "src",
            "--assembly=System.Runtime.json",
            "-o",
            "out",
            "--module=app",
            "extra",
        ]))
        .unwrap();
        assert_eq!(config.source_roots, vec![PathBuf::from("src"), PathBuf::from("extra")]);
        assert_eq!(config.assemblies, vec![PathBuf::from("System.Runtime.json")]);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.module_name, "app");
    }

    #[test]
    fn implicit_packages_extend_the_defaults() {
        let config =
            CompilerConfig::from_args(&args(&["--implicit-package", "System.Text"])).unwrap();
        assert_eq!(
            config.provider.implicit_packages,
            vec!["System".to_owned(), "System.Console".to_owned(), "System.Text".to_owned()]
        );
    }

    #[test]
    fn missing_value_is_a_usage_error() {
        let error = CompilerConfig::from_args(&args(&["--source"])).unwrap_err();
        assert_eq!(error.to_string(), "missing value for `--source`");
    }

    #[test]
    fn companion_field_switch_is_not_accepted() {
        let error =
            CompilerConfig::from_args(&args(&["--public-companion-fields"])).unwrap_err();
        assert!(matches!(error, DriverError::Usage(_)));
    }

    #[test]
    fn unknown_option_is_a_usage_error() {
        let error = CompilerConfig::from_args(&args(&["--fast"])).unwrap_err();
        assert_eq!(error.to_string(), "unknown option `--fast`");
    }

    #[test]
    fn default_imports_cover_both_worlds() {
        assert!(DEFAULT_IMPORTS.contains(&"kotlin.collections"));
        assert!(DEFAULT_IMPORTS.contains(&"System.Threading.Tasks"));
    }
}
