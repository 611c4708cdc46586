//! Ordered, type-tagged substitution rules.
//!
//! Rules run over HTML-escaped text, so reference tokens are matched in their
//! escaped form (`&lt;#123&gt;` rather than `<#123>`). Reference rules do not
//! write markup into the text directly: they park it in [`Placeholders`] and
//! leave an opaque marker behind, which keeps resolved names and emoji URLs
//! out of reach of the emphasis rules.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::escape::{escape_html, PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use super::resolve::{Mention, Resolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Mention,
    Channel,
    Emoji,
    Emphasis(Emphasis),
    LineBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    CodeBlock,
    InlineCode,
}

impl Emphasis {
    fn template(self) -> &'static str {
        match self {
            Emphasis::Bold => "<strong>${1}</strong>",
            Emphasis::Italic => "<em>${1}</em>",
            Emphasis::Underline => "<u>${1}</u>",
            Emphasis::Strikethrough => "<s>${1}</s>",
            // The language tag in group 1 is captured but not highlighted.
            Emphasis::CodeBlock => r#"<div class="code-block"><code>${2}</code></div>"#,
            Emphasis::InlineCode => r#"<code class="inline-code">${1}</code>"#,
        }
    }
}

pub struct Rule {
    pub kind: RuleKind,
    pattern: Regex,
}

/// Rules in evaluation order.
///
/// Fenced blocks are matched before inline code: the inline pattern would
/// otherwise consume the fence backticks and the block rule could never fire.
/// Italic and inline code refuse empty spans so a stray `**` or an unterminated
/// fence stays literal.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            RuleKind::Mention,
            r"@everyone|@here|&lt;@&amp;(\d+)&gt;|&lt;@(\d+)&gt;",
        ),
        Rule::new(RuleKind::Channel, r"&lt;#(\d+)&gt;"),
        Rule::new(RuleKind::Emoji, r"&lt;(a?):(\w+):(\d+)&gt;"),
        Rule::new(RuleKind::Emphasis(Emphasis::Bold), r"(?s)\*\*(.*?)\*\*"),
        Rule::new(RuleKind::Emphasis(Emphasis::Italic), r"\*([^*]+)\*"),
        Rule::new(RuleKind::Emphasis(Emphasis::Underline), r"(?s)__(.*?)__"),
        Rule::new(RuleKind::Emphasis(Emphasis::Strikethrough), r"(?s)~~(.*?)~~"),
        Rule::new(
            RuleKind::Emphasis(Emphasis::CodeBlock),
            r"(?s)```(\w*)\n(.*?)```",
        ),
        Rule::new(RuleKind::Emphasis(Emphasis::InlineCode), r"`([^`]+)`"),
        Rule::new(RuleKind::LineBreak, r"\n"),
    ]
});

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}(\d+){}", PLACEHOLDER_OPEN, PLACEHOLDER_CLOSE))
        .expect("placeholder pattern is valid")
});

impl Rule {
    fn new(kind: RuleKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("markup rule pattern is valid"),
        }
    }

    pub(super) fn apply(
        &self,
        input: &str,
        resolver: &Resolver<'_>,
        placeholders: &mut Placeholders,
    ) -> String {
        match self.kind {
            RuleKind::Mention => self
                .pattern
                .replace_all(input, |caps: &Captures<'_>| {
                    let mention = match (caps.get(1), caps.get(2)) {
                        (Some(role_id), _) => Mention::Role(role_id.as_str()),
                        (None, Some(user_id)) => Mention::User(user_id.as_str()),
                        (None, None) if &caps[0] == "@everyone" => Mention::Everyone,
                        (None, None) => Mention::Here,
                    };
                    let resolved = resolver.mention(mention);

                    placeholders.insert(format!(
                        r#"<span class="discord-mention" style="background-color: {};">{}</span>"#,
                        resolved.color,
                        escape_html(&resolved.name)
                    ))
                })
                .into_owned(),
            RuleKind::Channel => self
                .pattern
                .replace_all(input, |caps: &Captures<'_>| {
                    placeholders.insert(format!(
                        r#"<span class="discord-channel">{}</span>"#,
                        escape_html(&resolver.channel(&caps[1]))
                    ))
                })
                .into_owned(),
            RuleKind::Emoji => self
                .pattern
                .replace_all(input, |caps: &Captures<'_>| match resolver.emoji(&caps[3]) {
                    Some(emoji) => placeholders.insert(format!(
                        r#"<img src="{}" class="discord-custom-emoji" alt="{}">"#,
                        escape_html(&emoji.url),
                        &caps[2]
                    )),
                    None => caps[0].to_string(),
                })
                .into_owned(),
            RuleKind::Emphasis(emphasis) => self
                .pattern
                .replace_all(input, emphasis.template())
                .into_owned(),
            RuleKind::LineBreak => self.pattern.replace_all(input, "<br>").into_owned(),
        }
    }
}

/// Markup parked by the reference rules until every rule has run.
#[derive(Default)]
pub(super) struct Placeholders {
    markup: Vec<String>,
}

impl Placeholders {
    fn insert(&mut self, markup: String) -> String {
        let index = self.markup.len();
        self.markup.push(markup);

        format!("{}{}{}", PLACEHOLDER_OPEN, index, PLACEHOLDER_CLOSE)
    }

    pub(super) fn expand(&self, text: &str) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.markup.get(index))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}
