use hashbrown::HashMap;
use thiserror::Error;

/// The resolved target attached to a route: a controller reference, a method
/// name and the static arguments declared inline in the route file. The
/// matching engine carries this through without ever inspecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub controller: String,
    pub method: String,
    pub static_args: HashMap<String, String>,
}

impl ActionDescriptor {
    pub fn static_arg(&self, key: &str) -> Option<&str> {
        self.static_args.get(key).map(String::as_str)
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("action '{action}' is missing a '.' between controller and method")]
    MissingMethodSeparator { action: String },
    #[error("action '{action}' has an empty controller reference")]
    EmptyController { action: String },
    #[error("action '{action}' has an empty method name")]
    EmptyMethod { action: String },
    #[error("method name '{name}' in action '{action}' is not a valid identifier")]
    InvalidMethodName { action: String, name: String },
    #[error("action '{action}' has unbalanced parentheses")]
    UnbalancedParentheses { action: String },
    #[error("static argument list in action '{action}' is malformed near '{fragment}'")]
    MalformedArgument { action: String, fragment: String },
    #[error("static argument '{key}' is declared more than once in action '{action}'")]
    DuplicateArgument { action: String, key: String },
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Parses `Controller.method` or `Controller.method(key:'value', ...)`.
///
/// The controller reference may itself be dotted; the method name is the
/// last dot-separated component. Argument values are single-quoted and may
/// contain any character except the quote itself.
pub fn parse_action(input: &str) -> ActionResult<ActionDescriptor> {
    let input = input.trim();

    let (reference, args_src) = match input.find('(') {
        Some(open) => {
            if !input.ends_with(')') {
                return Err(ActionError::UnbalancedParentheses {
                    action: input.to_string(),
                });
            }
            (&input[..open], Some(&input[open + 1..input.len() - 1]))
        }
        None => {
            if input.contains(')') {
                return Err(ActionError::UnbalancedParentheses {
                    action: input.to_string(),
                });
            }
            (input, None)
        }
    };

    let reference = reference.trim_end();
    let Some(dot) = reference.rfind('.') else {
        return Err(ActionError::MissingMethodSeparator {
            action: input.to_string(),
        });
    };
    let controller = &reference[..dot];
    let method = &reference[dot + 1..];

    if controller.is_empty() {
        return Err(ActionError::EmptyController {
            action: input.to_string(),
        });
    }
    if method.is_empty() {
        return Err(ActionError::EmptyMethod {
            action: input.to_string(),
        });
    }
    if !is_identifier(method) {
        return Err(ActionError::InvalidMethodName {
            action: input.to_string(),
            name: method.to_string(),
        });
    }

    let mut static_args = HashMap::new();
    if let Some(args_src) = args_src {
        parse_static_args(input, args_src, &mut static_args)?;
    }

    Ok(ActionDescriptor {
        controller: controller.to_string(),
        method: method.to_string(),
        static_args,
    })
}

fn parse_static_args(
    action: &str,
    src: &str,
    out: &mut HashMap<String, String>,
) -> ActionResult<()> {
    let mut rest = src.trim();
    if rest.is_empty() {
        return Ok(());
    }

    loop {
        let Some(colon) = rest.find(':') else {
            return Err(malformed(action, rest));
        };
        let key = rest[..colon].trim();
        if !is_identifier(key) {
            return Err(malformed(action, rest));
        }

        let after_colon = rest[colon + 1..].trim_start();
        let Some(quoted) = after_colon.strip_prefix('\'') else {
            return Err(malformed(action, after_colon));
        };
        let Some(close) = quoted.find('\'') else {
            return Err(malformed(action, after_colon));
        };
        let value = &quoted[..close];

        if out.insert(key.to_string(), value.to_string()).is_some() {
            return Err(ActionError::DuplicateArgument {
                action: action.to_string(),
                key: key.to_string(),
            });
        }

        let tail = quoted[close + 1..].trim_start();
        if tail.is_empty() {
            return Ok(());
        }
        let Some(after_comma) = tail.strip_prefix(',') else {
            return Err(malformed(action, tail));
        };
        let after_comma = after_comma.trim_start();
        if after_comma.is_empty() {
            return Err(malformed(action, tail));
        }
        rest = after_comma;
    }
}

fn malformed(action: &str, fragment: &str) -> ActionError {
    ActionError::MalformedArgument {
        action: action.to_string(),
        fragment: fragment.chars().take(32).collect(),
    }
}

fn is_identifier(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(&first) if first.is_ascii_alphabetic() || first == b'_' => {}
        _ => return false,
    }
    bytes[1..]
        .iter()
        .all(|&c| c.is_ascii_alphanumeric() || c == b'_')
}
