//! Help and error text for a parameter store.

use crate::store::ParamStore;
use crate::types::ParamDecl;

/// Renders the help message.
///
/// Layout: the about text (if set), a usage line naming every positional
/// parameter, then named parameters, then positional parameters. Each
/// entry shows its current value when one is set.
pub fn render_message(store: &ParamStore) -> String {
    let mut out = String::new();

    if !store.about().is_empty() {
        out.push_str(store.about());
        out.push('\n');
    }

    out.push_str(&format!("Usage: {} [params] ", store.app_name()));
    for decl in positional(store) {
        out.push_str(decl.bare_name());
        out.push(' ');
    }
    out.push_str("\n\n");

    for decl in store.decls().iter().filter(|d| d.position.is_none()) {
        let flags: Vec<String> = decl
            .sorted_keys()
            .into_iter()
            .map(|key| {
                let dashes = if key.len() > 1 { "--" } else { "-" };
                format!("{dashes}{key}")
            })
            .collect();
        push_entry(&mut out, &flags.join(", "), decl);
    }
    out.push('\n');

    for decl in positional(store) {
        push_entry(&mut out, decl.bare_name(), decl);
    }

    out
}

/// Renders the error block, or `""` when nothing has been recorded.
pub fn render_errors(store: &ParamStore) -> String {
    if !store.has_errors() {
        return String::new();
    }
    format!("\nERRORS:\n{}\n", store.error_log())
}

fn positional(store: &ParamStore) -> impl Iterator<Item = &ParamDecl> {
    store.decls().iter().filter(|d| d.position.is_some())
}

fn push_entry(out: &mut String, label: &str, decl: &ParamDecl) {
    out.push('\t');
    out.push_str(label);
    let value = decl.resolved(true);
    if !value.is_empty() {
        out.push_str(&format!(" (value:{value})"));
    }
    out.push_str(&format!("\n\t\t{}\n", decl.help_message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamError;

    const KEYS: &str = "{help h usage ? || print this message}\
                        {@image1 || image1 for compare}\
                        {@repeat |1| number}\
                        {N count |100| count of objects}";

    #[test]
    fn test_message_lists_positionals_in_usage() {
        let mut store = ParamStore::build(&["/opt/bin/app", "a.png"], KEYS).unwrap();
        store.set_about("Application name v1.0.0");
        let message = render_message(&store);

        let mut lines = message.lines();
        assert_eq!(lines.next(), Some("Application name v1.0.0"));
        assert_eq!(lines.next(), Some("Usage: app [params] image1 repeat "));
    }

    #[test]
    fn test_message_prefixes_aliases_by_length() {
        let store = ParamStore::build(&["app"], KEYS).unwrap();
        let message = render_message(&store);
        assert!(message.contains("\t-?, -h, --help, --usage\n\t\tprint this message\n"));
        assert!(message.contains("\t-N, --count (value:100)\n\t\tcount of objects\n"));
    }

    #[test]
    fn test_message_shows_overlaid_positional_value() {
        let store = ParamStore::build(&["app", "a.png"], KEYS).unwrap();
        let message = render_message(&store);
        assert!(message.contains("\timage1 (value:a.png)\n\t\timage1 for compare\n"));
        let named = message.find("--count").unwrap();
        let positional = message.find("\timage1").unwrap();
        assert!(named < positional);
    }

    #[test]
    fn test_errors_empty_when_clean() {
        let store = ParamStore::build(&["app"], KEYS).unwrap();
        assert_eq!(render_errors(&store), "");
    }

    #[test]
    fn test_errors_block() {
        let mut store = ParamStore::build(&["app"], KEYS).unwrap();
        store.record(ParamError::UndeclaredKey("fps".to_string()));
        assert_eq!(
            render_errors(&store),
            "\nERRORS:\nundeclared key 'fps' requested\n\n"
        );
    }
}
