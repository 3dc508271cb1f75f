//! Edge case tests for picoc-lex

#[cfg(test)]
mod tests {
    use crate::{keyword_from_ident, Backtrack, LexicalAnalyzer, ScanConfig, Token, TokenType};
    use picoc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        LexicalAnalyzer::new(source, &handler).collect()
    }

    fn lex_types(source: &str) -> Vec<TokenType> {
        lex_all(source).into_iter().map(|t| t.token_type).collect()
    }

    fn eof_line(source: &str) -> u32 {
        let handler = Handler::new();
        let mut lexer = LexicalAnalyzer::new(source, &handler);
        loop {
            let token = lexer.get_token();
            if token.is_eof() {
                return token.line_no;
            }
        }
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::new(TokenType::Id, "x", 1)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1;", name));
        assert_eq!(t[0], Token::new(TokenType::Id, name, 1));
    }

    #[test]
    fn test_edge_all_keywords() {
        assert_eq!(
            lex_types("IF WHILE DO THEN PRINT"),
            vec![
                TokenType::If,
                TokenType::While,
                TokenType::Do,
                TokenType::Then,
                TokenType::Print,
            ]
        );
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(
            lex_types("If iF wHILE"),
            vec![TokenType::Id, TokenType::Id, TokenType::Id]
        );
    }

    #[test]
    fn test_edge_all_operators() {
        assert_eq!(
            lex_types("+ - * / = : , ; . [ ] ( ) < > <= >= <>"),
            vec![
                TokenType::Plus,
                TokenType::Minus,
                TokenType::Mult,
                TokenType::Div,
                TokenType::Equal,
                TokenType::Colon,
                TokenType::Comma,
                TokenType::Semicolon,
                TokenType::Dot,
                TokenType::LBrac,
                TokenType::RBrac,
                TokenType::LParen,
                TokenType::RParen,
                TokenType::Less,
                TokenType::Greater,
                TokenType::LtEq,
                TokenType::GtEq,
                TokenType::NotEqual,
            ]
        );
    }

    #[test]
    fn test_edge_consec_comparisons() {
        assert_eq!(
            lex_types("a<=b<>c>=d"),
            vec![
                TokenType::Id,
                TokenType::LtEq,
                TokenType::Id,
                TokenType::NotEqual,
                TokenType::Id,
                TokenType::GtEq,
                TokenType::Id,
            ]
        );
    }

    #[test]
    fn test_edge_suffix_without_body_is_identifier() {
        assert_eq!(lex_all("x08"), vec![Token::new(TokenType::Id, "x08", 1)]);
    }

    #[test]
    fn test_edge_zero_with_hex_suffix() {
        assert_eq!(lex_all("0x16"), vec![Token::new(TokenType::Base16Num, "0x16", 1)]);
    }

    #[test]
    fn test_edge_short_code_is_dropped() {
        let handler = Handler::new();
        let tokens: Vec<Token> = LexicalAnalyzer::new("0x1", &handler).collect();
        assert_eq!(tokens, vec![Token::new(TokenType::Num, "0", 1)]);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_edge_long_code_is_not_a_base() {
        assert_eq!(lex_all("1x0816"), vec![Token::new(TokenType::Num, "1", 1)]);
    }

    #[test]
    fn test_edge_second_dot_starts_new_token() {
        assert_eq!(
            lex_all("12.34.56"),
            vec![
                Token::new(TokenType::RealNum, "12.34", 1),
                Token::bare(TokenType::Dot, 1),
                Token::new(TokenType::Num, "56", 1),
            ]
        );
    }

    #[test]
    fn test_edge_real_then_suffix() {
        assert_eq!(
            lex_all("1.2x16"),
            vec![
                Token::new(TokenType::RealNum, "1.2", 1),
                Token::new(TokenType::Id, "x16", 1),
            ]
        );
    }

    #[test]
    fn test_edge_base_literal_has_no_fraction() {
        assert_eq!(
            lex_all("7x08.5"),
            vec![
                Token::new(TokenType::Base08Num, "7x08", 1),
                Token::bare(TokenType::Dot, 1),
                Token::new(TokenType::Num, "5", 1),
            ]
        );
    }

    #[test]
    fn test_edge_whitespace_variations() {
        assert_eq!(lex_types("\tx\x0By\x0Cz\r"), vec![TokenType::Id; 3]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\r\nc");
        let lines: Vec<u32> = t.iter().map(|t| t.line_no).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_eof_line_counts_trailing_newlines() {
        assert_eq!(eof_line(""), 1);
        assert_eq!(eof_line("x\n"), 2);
        assert_eq!(eof_line("\n\n\n"), 4);
    }

    #[test]
    fn test_edge_deep_pushback() {
        let handler = Handler::new();
        let mut lexer = LexicalAnalyzer::new("", &handler);
        let tokens: Vec<Token> = (0..1000)
            .map(|i| Token::new(TokenType::Num, i.to_string(), 1))
            .collect();
        for token in tokens.iter().rev() {
            lexer.unget_token(token.clone());
        }
        for expected in &tokens {
            assert_eq!(&lexer.get_token(), expected);
        }
        assert!(lexer.get_token().is_eof());
    }

    #[test]
    fn test_edge_display_formats() {
        assert_eq!(Token::new(TokenType::Id, "foo", 3).to_string(), "{foo , ID , 3}");
        assert_eq!(Token::bare(TokenType::EndOfFile, 1).to_string(), "{ , END_OF_FILE , 1}");
        assert_eq!(Token::new(TokenType::Base16Num, "19x16", 2).to_string(), "{19x16 , BASE16NUM , 2}");
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_invalid_chars() {
        for source in ["$", "@", "!", "\"", "_", "~", "{"] {
            let handler = Handler::new();
            let t: Vec<Token> = LexicalAnalyzer::new(source, &handler).collect();
            assert_eq!(t, vec![Token::bare(TokenType::Error, 1)], "input {:?}", source);
            assert!(handler.has_errors());
        }
    }

    #[test]
    fn test_err_non_ascii_letter() {
        assert_eq!(lex_types("é"), vec![TokenType::Error]);
        assert_eq!(lex_types("aé1"), vec![TokenType::Id, TokenType::Error, TokenType::Num]);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        assert_eq!(
            lex_types("x $ y"),
            vec![TokenType::Id, TokenType::Error, TokenType::Id]
        );
    }

    #[test]
    fn test_err_diagnostic_line() {
        let handler = Handler::new();
        let _: Vec<Token> = LexicalAnalyzer::new("a\n\n  #", &handler).collect();
        assert_eq!(handler.diagnostics()[0].line, 3);
    }

    #[test]
    fn test_err_restore_mode_never_errors_on_numbers() {
        let handler = Handler::new();
        let config = ScanConfig::new().with_backtrack(Backtrack::Restore);
        let t: Vec<Token> = LexicalAnalyzer::new("1. 2x99 3x08 4.", &handler)
            .with_config(config)
            .collect();
        assert!(t.iter().all(|t| !t.is_error()));
        assert!(!handler.has_errors());
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_alpha_runs_are_keyword_or_id() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z][a-zA-Z0-9]{0,40}")| {
            let tokens = lex_all(&input);
            assert_eq!(tokens.len(), 1);
            let expected = keyword_from_ident(&input).unwrap_or(TokenType::Id);
            assert_eq!(tokens[0], Token::new(expected, input, 1));
        });
    }

    #[test]
    fn test_property_decimal_runs_are_one_num() {
        use proptest::prelude::*;

        proptest!(|(input in "[1-9][0-9]{0,30}")| {
            assert_eq!(lex_all(&input), vec![Token::new(TokenType::Num, input, 1)]);
        });
    }

    #[test]
    fn test_property_reals_are_one_token() {
        use proptest::prelude::*;

        proptest!(|(whole in "0|[1-9][0-9]{0,8}", frac in "[0-9]{1,8}")| {
            let input = format!("{}.{}", whole, frac);
            assert_eq!(lex_all(&input), vec![Token::new(TokenType::RealNum, input, 1)]);
        });
    }

    #[test]
    fn test_property_whitespace_only_counts_lines() {
        use proptest::prelude::*;

        proptest!(|(input in "[ \t\n\r\x0B\x0C]{0,100}")| {
            let newlines = input.matches('\n').count() as u32;
            assert!(lex_all(&input).is_empty());
            assert_eq!(eof_line(&input), newlines + 1);
        });
    }

    #[test]
    fn test_property_lines_never_decrease() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 \n.;<>=x]{0,80}")| {
            let lines: Vec<u32> = lex_all(&input).iter().map(|t| t.line_no).collect();
            assert!(lines.windows(2).all(|w| w[0] <= w[1]));
        });
    }

    #[test]
    fn test_property_pushback_replays_in_order() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z0-9 \n.;:<>=+x]{0,80}", take in 0..20usize)| {
            let handler = Handler::new();
            let mut lexer = LexicalAnalyzer::new(&input, &handler);

            let taken: Vec<Token> = (0..take).map(|_| lexer.get_token()).collect();
            let line = lexer.line();
            for token in taken.iter().rev() {
                lexer.unget_token(token.clone());
            }
            let replayed: Vec<Token> = (0..take).map(|_| lexer.get_token()).collect();

            assert_eq!(replayed, taken);
            assert_eq!(lexer.line(), line);
            assert_eq!(lexer.pending_tokens(), 0);
        });
    }
}
