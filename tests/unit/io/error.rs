//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gridmaze::MazeError;
    use gridmaze::io::error::{internal_error, invalid_configuration, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MazeError::FileSystem {
            path: "/tmp/maze.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/maze.png"));
    }

    // Tests InvalidDimensions error names both dimensions
    // Verified by omitting height from message
    #[test]
    fn test_invalid_dimensions_error() {
        let error = MazeError::InvalidDimensions {
            width: 0,
            height: 12,
            reason: "width and height must be at least 1".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("0x12"));
        assert!(message.contains("at least 1"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("cell_width", &3, &"cells must be at least 5 pixels wide");

        let message = error.to_string();
        assert!(message.contains("cell_width"));
        assert!(message.contains('3'));
        assert!(message.contains("at least 5 pixels"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MazeError::ImageExport {
            path: PathBuf::from("/restricted/maze.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/maze.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests only invariant violations count as internal
    // Verified by classifying configuration errors as internal
    #[test]
    fn test_internal_classification() {
        let internal = internal_error("path search", &"stack exhausted");
        assert!(internal.is_internal());
        assert!(internal.to_string().contains("path search"));

        let configuration = invalid_configuration(&"start is excluded");
        assert!(!configuration.is_internal());
        assert!(configuration.to_string().contains("start is excluded"));
    }

    // Tests template errors carry their reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_template_error() {
        let error = MazeError::InvalidTemplate {
            reason: "unrecognized cell role code 9".to_string(),
        };
        assert!(error.to_string().contains("code 9"));
    }

    // Tests IO errors convert into file system errors
    // Verified by mapping IO errors to internal errors
    #[test]
    fn test_from_io_error() {
        let error: MazeError = std::io::Error::other("disk full").into();
        assert!(matches!(error, MazeError::FileSystem { .. }));
        assert!(error.source().is_some());
    }
}
