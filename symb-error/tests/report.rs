use symb_attrs::ErrorKind;
use symb_error::Error;

/// A test error pointing at a single region.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot handle `{}`", token),
    labels = ["this token"],
    help = "try something else",
)]
struct BadToken {
    token: String,
}

/// A test error with two labels.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "mismatched pair",
    labels = ["opened here", "closed here"],
)]
struct Mismatch;

/// A test error with only a message.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = format!("expected {} more", count))]
struct Truncated {
    count: usize,
}

fn render(err: &Error, source: &str) -> String {
    strip_ansi_escapes::strip_str(err.render("input", source))
}

#[test]
fn report_contains_message_and_label() {
    let source = "x + $";
    let err = Error::new(vec![4..5], BadToken { token: "$".to_string() });
    let out = render(&err, source);

    assert!(out.contains("cannot handle `$`"), "{out}");
    assert!(out.contains("this token"), "{out}");
    assert!(out.contains("try something else"), "{out}");
    assert!(out.contains("x + $"), "{out}");
}

#[test]
fn report_with_multiple_labels() {
    let source = "(a + b]";
    let err = Error::new(vec![0..1, 6..7], Mismatch);
    let out = render(&err, source);

    assert!(out.contains("mismatched pair"), "{out}");
    assert!(out.contains("opened here"), "{out}");
    assert!(out.contains("closed here"), "{out}");
}

#[test]
fn downcast_kind() {
    let err = Error::new(vec![0..1], Mismatch);
    assert!(err.is::<Mismatch>());
    assert!(!err.is::<BadToken>());
    assert_eq!(err.downcast_ref::<Mismatch>(), Some(&Mismatch));
}

#[test]
fn report_without_labels() {
    let err = Error::new(vec![2..3], Truncated { count: 2 });
    let out = render(&err, "x +");

    assert!(out.contains("expected 2 more"), "{out}");
    assert_eq!(err.downcast_ref::<Truncated>(), Some(&Truncated { count: 2 }));
}
