//! Command-line handling for the demo that loads a model file.

use std::path::PathBuf;

use crate::error::{DemoError, Result};

/// Extracts the model path from the process arguments, program name first.
///
/// Exactly one argument must follow the program name.
pub fn model_path_from_args<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let program = args
        .next()
        .map(|p| {
            PathBuf::from(p)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(DemoError::Usage { program }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_argument_is_the_model() {
        let path = model_path_from_args(["spinningcube", "cube.json"]).unwrap();
        assert_eq!(path, PathBuf::from("cube.json"));
    }

    #[test]
    fn missing_argument_is_a_usage_error() {
        let err = model_path_from_args(["./target/debug/spinningcube"]).unwrap_err();
        assert_eq!(err.to_string(), "Usage: spinningcube <model file>");
    }

    #[test]
    fn extra_arguments_are_a_usage_error() {
        let err = model_path_from_args(["spinningcube", "a.glb", "b.glb"]).unwrap_err();
        assert!(matches!(err, DemoError::Usage { .. }));
    }

    #[test]
    fn empty_argument_list_falls_back_to_package_name() {
        let err = model_path_from_args(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.to_string(), "Usage: spinningcube <model file>");
    }
}
