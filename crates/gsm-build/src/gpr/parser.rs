// GPR Expression Parser
//
// Two stages. The tokenizer walks the raw association text and mirrors
// its parenthesis structure into a nested token sequence, with an
// implicit outer group around the whole expression. The normalizer then
// reduces that sequence into the canonical AND/OR/Leaf tree, recursing to
// whatever depth the curators nested.
//
// Both stages are pure: nothing is mutated in place and no state survives
// a call.

use super::models::{render_level, LogicalNode, Token};
use super::{GprError, Result};

const KEYWORD_AND: &str = "and";
const KEYWORD_OR: &str = "or";

fn is_operator(word: &str) -> bool {
    word == KEYWORD_AND || word == KEYWORD_OR
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Tokenizer for gene-association expressions
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenize association text into a nested token sequence.
    ///
    /// Parentheses open and close nested groups; whitespace separates
    /// words; any other run of characters is a single word. Empty input
    /// yields an empty sequence.
    pub fn tokenize(expr: &str) -> Result<Vec<Token>> {
        // One Vec per open group; index 0 is the implicit outer group.
        let mut stack: Vec<Vec<Token>> = vec![Vec::new()];
        let mut word = String::new();

        for ch in expr.chars() {
            match ch {
                '(' => {
                    Self::flush_word(&mut stack, &mut word);
                    stack.push(Vec::new());
                },
                ')' => {
                    Self::flush_word(&mut stack, &mut word);
                    let group = match stack.pop() {
                        Some(group) if !stack.is_empty() => group,
                        _ => {
                            return Err(GprError::UnbalancedParentheses {
                                expr: expr.to_string(),
                            })
                        },
                    };
                    if let Some(parent) = stack.last_mut() {
                        parent.push(Token::Group(group));
                    }
                },
                c if c.is_whitespace() => {
                    Self::flush_word(&mut stack, &mut word);
                },
                c => word.push(c),
            }
        }
        Self::flush_word(&mut stack, &mut word);

        if stack.len() != 1 {
            return Err(GprError::UnbalancedParentheses {
                expr: expr.to_string(),
            });
        }
        Ok(stack.pop().unwrap_or_default())
    }

    fn flush_word(stack: &mut Vec<Vec<Token>>, word: &mut String) {
        if word.is_empty() {
            return;
        }
        if let Some(top) = stack.last_mut() {
            top.push(Token::Ident(std::mem::take(word)));
        }
    }
}

// ============================================================================
// Normalizer
// ============================================================================

/// Normalizer reducing a token sequence into the canonical logical tree
pub struct Normalizer;

impl Normalizer {
    /// Normalize a tokenized expression.
    ///
    /// Returns `None` for an absent association (empty input, or only
    /// empty groups like "()"), otherwise the canonical tree.
    pub fn normalize(tokens: &[Token]) -> Result<Option<LogicalNode>> {
        let mut level = tokens;
        while let [Token::Group(inner)] = level {
            level = inner;
        }
        if level.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::normalize_level(level)?))
    }

    /// Normalize one nesting level into a node.
    ///
    /// Inside an expression an empty group is malformed rather than an
    /// absent association, so this variant errors where `normalize`
    /// returns `None`.
    fn normalize_level(tokens: &[Token]) -> Result<LogicalNode> {
        // Unwrap single-element wrappers until something substantive remains.
        let mut level = tokens;
        loop {
            match level {
                [] => return Err(GprError::EmptyGroup),
                [Token::Group(inner)] => level = inner,
                [Token::Ident(word)] => {
                    if is_operator(word) {
                        return Err(GprError::DanglingOperator {
                            level: render_level(tokens),
                        });
                    }
                    return Ok(LogicalNode::Leaf(word.clone()));
                },
                _ => break,
            }
        }

        // The first operator keyword decides the level; any different
        // keyword at the same level is ambiguous precedence.
        let mut operator: Option<&str> = None;
        for token in level {
            if let Token::Ident(word) = token {
                if is_operator(word) {
                    match operator {
                        None => operator = Some(word.as_str()),
                        Some(current) if current != word => {
                            return Err(GprError::AmbiguousOperators {
                                level: render_level(level),
                            })
                        },
                        Some(_) => {},
                    }
                }
            }
        }
        let operator = operator.ok_or_else(|| GprError::MissingOperator {
            level: render_level(level),
        })?;

        // The keyword is positional noise once identified; everything
        // else becomes a child, in encounter order.
        let mut children = Vec::new();
        for token in level {
            match token {
                Token::Ident(word) if is_operator(word) => {},
                Token::Ident(word) => children.push(LogicalNode::Leaf(word.clone())),
                Token::Group(inner) => children.push(Self::normalize_level(inner)?),
            }
        }

        match children.len() {
            0 => Err(GprError::DanglingOperator {
                level: render_level(level),
            }),
            // A single operand collapses to itself; no unary operators.
            1 => Ok(children.remove(0)),
            _ => Ok(if operator == KEYWORD_AND {
                LogicalNode::And(children)
            } else {
                LogicalNode::Or(children)
            }),
        }
    }
}

// ============================================================================
// Compiler Facade
// ============================================================================

/// GPR compiler (tokenize + normalize)
pub struct GprCompiler;

impl GprCompiler {
    /// Compile association text into a canonical tree, `None` when the
    /// record carries no association.
    pub fn compile(expr: &str) -> Result<Option<LogicalNode>> {
        let tokens = Tokenizer::tokenize(expr)?;
        Normalizer::normalize(&tokens)
    }
}

// ============================================================================
// Tests
// ============================================================================
