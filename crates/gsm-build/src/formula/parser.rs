// Formula Parser

use super::models::{ParsedReaction, StoichiometryMap};
use super::{FormulaError, Result};

/// Separator between the reactant and product sides of an equation
pub const FORMULA_SEPARATOR: &str = "<=>";

/// Parser for curated reaction equations
pub struct FormulaParser;

impl FormulaParser {
    /// Parse an equation into reactant/product coefficient maps.
    ///
    /// The text must contain exactly one `<=>`. Each side is a
    /// `+`-separated list of terms; a term is either
    /// `<coefficient> <species>` or a bare species with implicit
    /// coefficient `"1"`. Explicit numeric coefficients are normalized to
    /// their canonical decimal form (`"2"` -> `"2.0"`); anything
    /// non-numeric is kept verbatim. A blank side parses to an empty map.
    pub fn parse(formula: &str) -> Result<ParsedReaction> {
        let Some((left, right)) = formula.split_once(FORMULA_SEPARATOR) else {
            return Err(FormulaError::MissingSeparator(formula.to_string()));
        };
        if right.contains(FORMULA_SEPARATOR) {
            return Err(FormulaError::ExtraSeparator(formula.to_string()));
        }

        Ok(ParsedReaction {
            reactants: Self::parse_side(left),
            products: Self::parse_side(right),
        })
    }

    fn parse_side(side: &str) -> StoichiometryMap {
        let mut map = StoichiometryMap::new();

        for term in side.split('+') {
            let term = term.trim();
            if term.is_empty() {
                // Blank side (or stray '+'): no spurious empty entry
                continue;
            }

            let tokens: Vec<&str> = term.split_whitespace().collect();
            let (species, coefficient) = match tokens.as_slice() {
                [species] => ((*species).to_string(), "1".to_string()),
                [coefficient, species] => {
                    ((*species).to_string(), Self::normalize_coefficient(coefficient))
                },
                // Three or more tokens have always been folded to a bare
                // species named by the first token.
                [first, ..] => ((*first).to_string(), "1".to_string()),
                [] => continue,
            };
            map.insert(species, coefficient);
        }

        map
    }

    /// Canonical decimal form for numeric coefficients; non-numeric text
    /// (and non-finite values) passes through verbatim.
    fn normalize_coefficient(raw: &str) -> String {
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => format!("{:?}", value),
            _ => raw.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_equation() {
        let reaction = FormulaParser::parse("A + 2 B <=> C").unwrap();

        assert_eq!(reaction.reactants.get("A"), Some("1"));
        assert_eq!(reaction.reactants.get("B"), Some("2.0"));
        assert_eq!(reaction.reactants.len(), 2);
        assert_eq!(reaction.products.get("C"), Some("1"));
        assert_eq!(reaction.products.len(), 1);
    }

    #[test]
    fn test_parse_fractional_coefficient() {
        let reaction = FormulaParser::parse("0.5 O2 <=> H2O").unwrap();
        assert_eq!(reaction.reactants.get("O2"), Some("0.5"));
    }

    #[test]
    fn test_parse_non_numeric_coefficient_verbatim() {
        let reaction = FormulaParser::parse("n GLYCOGEN <=> GLC").unwrap();
        assert_eq!(reaction.reactants.get("GLYCOGEN"), Some("n"));
    }

    #[test]
    fn test_parse_blank_product_side() {
        let reaction = FormulaParser::parse("A <=> ").unwrap();
        assert_eq!(reaction.reactants.get("A"), Some("1"));
        assert!(reaction.products.is_empty());
    }

    #[test]
    fn test_parse_blank_both_sides() {
        let reaction = FormulaParser::parse(" <=> ").unwrap();
        assert!(reaction.reactants.is_empty());
        assert!(reaction.products.is_empty());
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(matches!(
            FormulaParser::parse("A + B -> C"),
            Err(FormulaError::MissingSeparator(_))
        ));
    }

    #[test]
    fn test_parse_extra_separator() {
        assert!(matches!(
            FormulaParser::parse("A <=> B <=> C"),
            Err(FormulaError::ExtraSeparator(_))
        ));
    }

    #[test]
    fn test_parse_duplicate_species_last_write_wins() {
        let reaction = FormulaParser::parse("A + 2 A <=> B").unwrap();
        assert_eq!(reaction.reactants.len(), 1);
        assert_eq!(reaction.reactants.get("A"), Some("2.0"));
    }

    #[test]
    fn test_parse_overlong_term_folds_to_first_token() {
        let reaction = FormulaParser::parse("2 X Y <=> B").unwrap();
        assert_eq!(reaction.reactants.get("2"), Some("1"));
        assert_eq!(reaction.reactants.len(), 1);
    }

    #[test]
    fn test_normalize_coefficient() {
        assert_eq!(FormulaParser::normalize_coefficient("2"), "2.0");
        assert_eq!(FormulaParser::normalize_coefficient("0.5"), "0.5");
        assert_eq!(FormulaParser::normalize_coefficient("1e3"), "1000.0");
        assert_eq!(FormulaParser::normalize_coefficient("n"), "n");
        assert_eq!(FormulaParser::normalize_coefficient("inf"), "inf");
    }
}
