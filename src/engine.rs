use crate::env::Env;
use crate::errors::Result;
use crate::registry::Registry;
use itertools::Itertools;
use serde_json::Value;
use tracing::trace;

/// Substitute every registered `:tag` occurrence in `pattern` against `env`.
///
/// Names are processed longest first, with descending lexicographic order as
/// the tie-break for equal lengths, so `:title_foobar` is matched before
/// `:title` and before `:foobar` no matter the registration order.
///
/// Each pass rewrites the accumulated result of the previous passes, not the
/// original pattern. Text returned by a resolver is therefore visible to
/// later (shorter-name) passes: if an earlier resolver emits a literal
/// `:title`, the `title` pass will substitute it. That ordering is part of
/// the contract, not an accident.
///
/// Matching is purely textual (`:` followed by the name, no word-boundary
/// guard); unregistered tag-like tokens are left untouched. The pattern is
/// never mutated; a fresh string comes back.
pub fn interpolate(registry: &Registry, pattern: &str, env: &Env, args: &[Value]) -> Result<String> {
    let names = registry
        .names()
        .into_iter()
        .sorted_by(|a, b| b.len().cmp(&a.len()).then_with(|| b.cmp(a)))
        .collect::<Vec<_>>();

    let mut result = pattern.to_string();
    for name in names {
        let tag = format!(":{name}");
        if !result.contains(&tag) {
            continue;
        }
        // One resolver call per pass; the output is reused for every
        // occurrence of the tag in the current result.
        let replacement = registry.resolve(&name, env, args)?;
        trace!(tag = %tag, replacement = %replacement, "substituting");
        result = result.replace(&tag, &replacement);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InterpolateError;
    use pretty_assertions::assert_eq;

    fn builtins() -> Registry {
        Registry::with_builtins(|| "Widgets".to_string())
    }

    #[test]
    fn substitutes_title_and_app() {
        let registry = builtins();
        let env = Env::new().with_title("Home");
        let out = interpolate(&registry, ":title - :app", &env, &[]).unwrap();
        assert_eq!(out, "Home - Widgets");
    }

    #[test]
    fn longest_name_wins_regardless_of_registration_order() {
        let registry = builtins();
        registry.register("foobar", |_: &Env, _: &[Value]| Ok("X".to_string()));
        registry.register("foobar_test", |_: &Env, _: &[Value]| Ok("Y".to_string()));
        registry.register("title_foobar", |_: &Env, _: &[Value]| Ok("Z".to_string()));

        let out = interpolate(
            &registry,
            ":title_foobar / :foobar_test / :foobar / :foobar_x",
            &Env::new(),
            &[],
        )
        .unwrap();
        assert_eq!(out, "Z / Y / X / :foobar_x");
    }

    #[test]
    fn pattern_without_registered_tags_is_unchanged() {
        let registry = builtins();
        let out = interpolate(&registry, "plain text, :unknown too", &Env::new(), &[]).unwrap();
        assert_eq!(out, "plain text, :unknown too");
    }

    #[test]
    fn resolver_output_is_seen_by_later_passes() {
        // `zzzzzz` is longer than `title`, so it runs first; its output
        // containing a literal `:title` is rewritten by the later pass.
        let registry = builtins();
        registry.register("zzzzzz", |_: &Env, _: &[Value]| {
            Ok("see :title here".to_string())
        });
        let env = Env::new().with_title("Home");
        let out = interpolate(&registry, ":zzzzzz", &env, &[]).unwrap();
        assert_eq!(out, "see Home here");
    }

    #[test]
    fn equal_length_names_break_ties_lexicographically_descending() {
        let registry = Registry::new();
        registry.register("ab", |_: &Env, _: &[Value]| Ok(":aa".to_string()));
        registry.register("aa", |_: &Env, _: &[Value]| Ok("done".to_string()));
        // `ab` runs first (descending lex for equal length), its output
        // `:aa` is then rewritten by the `aa` pass.
        let out = interpolate(&registry, ":ab", &Env::new(), &[]).unwrap();
        assert_eq!(out, "done");
    }

    #[test]
    fn resolver_errors_propagate_and_yield_no_partial_result() {
        let registry = builtins();
        registry.register("boom", |_: &Env, _: &[Value]| {
            Err(InterpolateError::resolver("boom", "lookup failed"))
        });
        let err = interpolate(&registry, ":title - :boom", &Env::new(), &[]).unwrap_err();
        assert!(matches!(err, InterpolateError::Resolver { tag, .. } if tag == "boom"));
    }

    #[test]
    fn failing_resolver_is_not_invoked_when_its_tag_is_absent() {
        let registry = builtins();
        registry.register("boom", |_: &Env, _: &[Value]| {
            Err(InterpolateError::resolver("boom", "lookup failed"))
        });
        let env = Env::new().with_title("ok");
        assert_eq!(interpolate(&registry, ":title", &env, &[]).unwrap(), "ok");
    }

    #[test]
    fn extra_args_are_forwarded_to_resolvers() {
        let registry = Registry::new();
        registry.register("nth", |_: &Env, args: &[Value]| {
            Ok(args
                .first()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string())
        });
        let args = vec![Value::String("forwarded".to_string())];
        let out = interpolate(&registry, ":nth", &Env::new(), &args).unwrap();
        assert_eq!(out, "forwarded");
    }
}
