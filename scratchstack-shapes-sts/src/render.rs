use {
    chrono::{DateTime, SecondsFormat, Utc},
    std::fmt::{Formatter, Result as FmtResult},
};

/// Placeholder printed in place of sensitive values such as secret keys and session tokens.
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Renders a member value for the human-readable form of a shape.
///
/// This is a debugging aid only; the rendered form is not a wire format.
pub(crate) trait Render {
    fn render(&self) -> String;
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for i32 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for DateTime<Utc> {
    fn render(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Render::render).collect();
        format!("[{}]", items.join(", "))
    }
}

/// Write `{Name: value,...}` for the members that are set.
///
/// A comma follows each rendered member except the last declared member of the shape, so a shape with only its
/// first member set still renders a trailing comma: `{Key: env,}`.
pub(crate) fn write_shape(f: &mut Formatter, members: &[(&str, Option<String>)]) -> FmtResult {
    f.write_str("{")?;
    let last = members.len().saturating_sub(1);

    for (i, (name, value)) in members.iter().enumerate() {
        if let Some(value) = value {
            write!(f, "{name}: {value}")?;
            if i != last {
                f.write_str(",")?;
            }
        }
    }

    f.write_str("}")
}
