//! CSS-like selectors for matching nodes.
//!
//! Supports the subset element lookups need: type, `.class`, `#id`, `*`,
//! `[attr]` and `[attr=value]`, chained into compounds
//! (`div.panel[data-config]`) and grouped with commas. Combinators are not
//! supported.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::{many1, separated_list1},
    sequence::{delimited, pair, preceded},
    IResult,
};
use thiserror::Error;

use crate::element::Node;

/// Errors from parsing selector text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    /// The text could not be parsed at all.
    #[error("Invalid selector: {0:?}")]
    Syntax(String),

    /// A valid prefix was followed by unparseable text.
    #[error("Unexpected {rest:?} in selector {input:?}")]
    Trailing { input: String, rest: String },
}

/// A single condition on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    Type(String),
    Id(String),
    Class(String),
    Attribute { name: String, value: Option<String> },
}

impl SimpleSelector {
    fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Universal => true,
            Self::Type(tag) => node.tag().eq_ignore_ascii_case(tag),
            Self::Id(id) => node.attr("id") == Some(id.as_str()),
            Self::Class(class) => node.has_class(class),
            Self::Attribute { name, value: None } => node.attr(name).is_some(),
            Self::Attribute {
                name,
                value: Some(value),
            } => node.attr(name) == Some(value.as_str()),
        }
    }
}

/// Simple selectors that must all match the same node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector(pub Vec<SimpleSelector>);

impl CompoundSelector {
    fn matches(&self, node: &Node) -> bool {
        self.0.iter().all(|simple| simple.matches(node))
    }
}

/// A comma separated selector list; matches when any alternative does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<CompoundSelector>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let (rest, alternatives) = delimited(multispace0, parse_selector_list, multispace0)(input)
            .map_err(|_| SelectorError::Syntax(input.to_string()))?;

        if !rest.is_empty() {
            return Err(SelectorError::Trailing {
                input: input.to_string(),
                rest: rest.to_string(),
            });
        }

        Ok(Self { alternatives })
    }

    /// `.{class}` without going through the parser.
    pub fn class(class: impl Into<String>) -> Self {
        Self::simple(SimpleSelector::Class(class.into()))
    }

    /// `[{name}]` without going through the parser.
    pub fn has_attr(name: impl Into<String>) -> Self {
        Self::simple(SimpleSelector::Attribute {
            name: name.into(),
            value: None,
        })
    }

    fn simple(selector: SimpleSelector) -> Self {
        Self {
            alternatives: vec![CompoundSelector(vec![selector])],
        }
    }

    pub fn alternatives(&self) -> &[CompoundSelector] {
        &self.alternatives
    }

    pub fn matches(&self, node: &Node) -> bool {
        self.alternatives.iter().any(|compound| compound.matches(node))
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn parse_attribute_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
        parse_ident,
    ))(input)
}

fn parse_attribute_selector(input: &str) -> IResult<&str, SimpleSelector> {
    let (input, _) = pair(char('['), multispace0)(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, value) = opt(preceded(
        delimited(multispace0, char('='), multispace0),
        parse_attribute_value,
    ))(input)?;
    let (input, _) = pair(multispace0, char(']'))(input)?;

    Ok((
        input,
        SimpleSelector::Attribute {
            name: name.to_string(),
            value: value.map(str::to_string),
        },
    ))
}

fn parse_simple_selector(input: &str) -> IResult<&str, SimpleSelector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            SimpleSelector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            SimpleSelector::Class(s.to_string())
        }),
        map(char('*'), |_| SimpleSelector::Universal),
        parse_attribute_selector,
        map(parse_ident, |s| SimpleSelector::Type(s.to_string())),
    ))(input)
}

fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    map(many1(parse_simple_selector), CompoundSelector)(input)
}

fn parse_selector_list(input: &str) -> IResult<&str, Vec<CompoundSelector>> {
    separated_list1(
        delimited(multispace0, char(','), multispace0),
        parse_compound_selector,
    )(input)
}
