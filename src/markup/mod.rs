//! Discord-flavored markdown to HTML markup for the live message preview.
//!
//! The transformer is shared between the browser build and the server so both
//! render a message the same way. It is a pure function of the message text
//! and the session's [`ReferenceTable`]:
//!
//! 1. the whole input is HTML-escaped,
//! 2. each [`Rule`] in [`RULES`] runs in order over the escaped text,
//! 3. markup parked by the reference rules is expanded.
//!
//! Unterminated emphasis markers and fences simply fail to match and stay in
//! the output as literal text.

mod escape;
mod resolve;
mod rule;

#[cfg(test)]
mod test;

pub use escape::escape_html;
pub use resolve::{
    Mention, Resolved, Resolver, DEFAULT_HIGHLIGHT, UNKNOWN_CHANNEL, UNKNOWN_ROLE,
    USER_PLACEHOLDER,
};
pub use rule::{Emphasis, Rule, RuleKind, RULES};

use crate::model::reference::ReferenceTable;
use rule::Placeholders;

/// Renders message text as preview markup.
pub fn transform(text: &str, table: &ReferenceTable) -> String {
    let resolver = Resolver::new(table);
    let mut placeholders = Placeholders::default();

    let markup = RULES.iter().fold(escape_html(text), |markup, rule| {
        rule.apply(&markup, &resolver, &mut placeholders)
    });

    placeholders.expand(&markup)
}
