//! Build tag policy.
//!
//! The toolchain keeps only the last `-tags` flag it sees, so the required
//! kernel tag has to be folded into whatever tag list the caller already
//! supplies rather than passed alongside it.
//!
//! The scan for the caller's flag runs past package arguments and stops only
//! at `-args`. `go test` accepts build flags after its packages. `go build`
//! does not, and rejects a later `-tags` as a package path, so looking at it
//! changes nothing for that verb.

/// How the required tag reaches the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPlan {
  /// The tag is already in effect; nothing to add.
  Present,
  /// The caller's tags flag at `index` lacks the tag; its value becomes `value`.
  Merge { index: usize, value: String },
  /// No tags flag anywhere; pass `-tags <value>`.
  Inject(String),
}

/// A `-tags` occurrence in an argument list.
#[derive(Debug, PartialEq, Eq)]
struct TagsFlag<'a> {
  /// Index of the argument holding the value.
  index: usize,
  /// Whether the value is attached with `=` (and so shares the flag's argument).
  inline: bool,
  value: &'a str,
}

/// Decides how to make `required` effective given the caller's compiler
/// arguments and the ambient `GOFLAGS` value.
pub fn plan_tags(args: &[String], goflags: Option<&str>, required: &str) -> TagPlan {
  if let Some(flag) = find_tags_flag(args.iter().map(String::as_str)) {
    if has_tag(flag.value, required) {
      return TagPlan::Present;
    }
    let merged = append_tag(flag.value, required);
    let value = if flag.inline {
      // keep the caller's spelling of the flag name
      let name = args[flag.index].split_once('=').map_or("-tags", |(name, _)| name);
      format!("{}={}", name, merged)
    } else {
      merged
    };
    return TagPlan::Merge {
      index: flag.index,
      value,
    };
  }

  // GOFLAGS only applies when the command line carries no tags of its own
  let ambient = goflags.and_then(|flags| find_tags_flag(flags.split_whitespace()));
  match ambient {
    Some(flag) if has_tag(flag.value, required) => TagPlan::Present,
    Some(flag) => TagPlan::Inject(append_tag(flag.value, required)),
    None => TagPlan::Inject(required.to_string()),
  }
}

/// Finds the last tags flag, which is the one the toolchain honours.
fn find_tags_flag<'a>(args: impl Iterator<Item = &'a str>) -> Option<TagsFlag<'a>> {
  let args: Vec<&str> = args.collect();
  let mut found = None;
  let mut i = 0;
  while i < args.len() {
    let arg = args[i];
    // everything after -args belongs to the test binary
    if arg == "-args" || arg == "--args" {
      break;
    }
    if let Some(rest) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
      if rest == "tags" {
        if let Some(&value) = args.get(i + 1) {
          found = Some(TagsFlag {
            index: i + 1,
            inline: false,
            value,
          });
          i += 1;
        }
      } else if let Some(value) = rest.strip_prefix("tags=") {
        found = Some(TagsFlag {
          index: i,
          inline: true,
          value,
        });
      }
    }
    i += 1;
  }
  found
}

fn split_tags(value: &str) -> impl Iterator<Item = &str> {
  value.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty())
}

fn has_tag(value: &str, tag: &str) -> bool {
  split_tags(value).any(|t| t == tag)
}

fn append_tag(value: &str, tag: &str) -> String {
  split_tags(value).chain(std::iter::once(tag)).collect::<Vec<_>>().join(",")
}
