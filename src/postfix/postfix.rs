use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref PRECEDENCE: HashMap<char, u8> = {
        let mut map = HashMap::new();
        map.insert('+', 1);
        map.insert('-', 1);
        map.insert('*', 2);
        map.insert('/', 2);
        map
    };
}

/// Result of one conversion: the space-separated postfix expression and the
/// characters that were skipped because they belong to no operand or
/// operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub ignored: Vec<char>,
}

/// Converts an infix arithmetic expression to postfix notation.
///
/// Operands are unsigned multi-digit integers; `*` and `/` bind tighter
/// than `+` and `-`; parentheses group. The expression is wrapped in an
/// outer pair of parentheses so every operator is drained from the stack.
/// Whitespace is skipped and any other character is collected in
/// `ignored` without interrupting the conversion.
pub fn infix_to_postfix(expression: &str) -> Conversion {
    let mut operators: Vec<char> = vec![];
    let mut output: Vec<String> = vec![];
    let mut ignored: Vec<char> = vec![];
    let mut digits = String::new();

    let wrapped = format!("({})", expression);

    for character in wrapped.chars() {
        if character.is_ascii_digit() {
            digits.push(character);
            continue;
        }

        // The character ends any number being accumulated.
        if !digits.is_empty() {
            output.push(std::mem::take(&mut digits));
        }

        if let Some(&precedence) = PRECEDENCE.get(&character) {
            while let Some(&top) = operators.last() {
                match PRECEDENCE.get(&top) {
                    Some(&top_precedence) if top_precedence >= precedence => {
                        output.push(top.to_string());
                        operators.pop();
                    }
                    _ => break,
                }
            }
            operators.push(character);
        } else if character == '(' {
            operators.push(character);
        } else if character == ')' {
            while let Some(&top) = operators.last() {
                operators.pop();
                if top == '(' {
                    break;
                }
                output.push(top.to_string());
            }
        } else if !character.is_whitespace() {
            ignored.push(character);
        }
    }

    // An unmatched `(` left on the stack is dropped, never emitted.
    while let Some(operator) = operators.pop() {
        if operator != '(' {
            output.push(operator.to_string());
        }
    }

    Conversion {
        output: output.join(" "),
        ignored,
    }
}
