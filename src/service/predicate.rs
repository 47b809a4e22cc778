//! Keyword search compiled into an "any searchable column contains" condition.

use sea_orm::{
    sea_query::{BinOper, Expr, ExprTrait, Func},
    ColumnTrait, Condition,
};

use crate::model::search::SearchSpec;

/// Text predicate over a resource's searchable columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextPredicate<C> {
    /// No effective keyword; every record matches.
    MatchAll,
    /// A keyword was given but the resource declares no searchable columns.
    MatchNothing,
    /// Any of `columns` contains `needle`, ignoring case.
    ///
    /// `needle` is kept as typed; the store folds it with the same `LOWER` as the column.
    AnyContains { columns: Vec<C>, needle: String },
}

/// The keyword a search runs with.
///
/// A non-blank advanced-search keyword wins over the primary keyword. Blank keywords
/// count as absent and surrounding whitespace is trimmed.
pub fn effective_keyword(spec: &SearchSpec) -> Option<&str> {
    fn non_blank(keyword: &Option<String>) -> Option<&str> {
        keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }

    spec.advanced_search
        .as_ref()
        .and_then(|advanced| non_blank(&advanced.keyword))
        .or_else(|| non_blank(&spec.keyword))
}

/// Compiles the keyword part of `spec` against `searchable`.
pub fn compile<C: Copy>(searchable: &[C], spec: &SearchSpec) -> TextPredicate<C> {
    match effective_keyword(spec) {
        None => TextPredicate::MatchAll,
        Some(_) if searchable.is_empty() => TextPredicate::MatchNothing,
        Some(keyword) => TextPredicate::AnyContains {
            columns: searchable.to_vec(),
            needle: keyword.to_string(),
        },
    }
}

impl<C: ColumnTrait> TextPredicate<C> {
    pub fn into_condition(self) -> Condition {
        match self {
            TextPredicate::MatchAll => Condition::all(),
            TextPredicate::MatchNothing => Condition::all().add(Expr::cust("1 = 0")),
            TextPredicate::AnyContains { columns, needle } => {
                // Both sides go through the same LOWER so folding never differs by side.
                let pattern = Expr::from(Func::lower(Expr::val(like_contains(&needle))))
                    .binary(BinOper::Escape, Expr::Constant(LIKE_ESCAPE.into()));

                columns.into_iter().fold(Condition::any(), |condition, column| {
                    condition.add(
                        Expr::from(Func::lower(Expr::col(column)))
                            .binary(BinOper::Like, pattern.clone()),
                    )
                })
            }
        }
    }
}

const LIKE_ESCAPE: char = '!';

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | LIKE_ESCAPE => {
                out.push(LIKE_ESCAPE);
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}
