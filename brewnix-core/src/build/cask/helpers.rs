// brewnix-core/src/build/cask/helpers.rs
use brewnix_common::error::LoweringError;
use brewnix_common::model::artifact::FileSpec;

/// Nix build output root, left unexpanded for the builder's shell.
pub const OUT: &str = "$out";
/// Homebrew's application directory placeholder.
pub const APPDIR: &str = "$APPDIR";

/// Derives the Nix `pname` from a cask token. Only the first character outside
/// `[A-Za-z0-9-]` is replaced; existing package identities depend on that.
pub fn sanitize_pname(token: &str) -> String {
    match token
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        Some((i, c)) => {
            let mut pname = String::with_capacity(token.len());
            pname.push_str(&token[..i]);
            pname.push('_');
            pname.push_str(&token[i + c.len_utf8()..]);
            pname
        }
        None => token.to_string(),
    }
}

/// Last `/`-separated component, if it is non-empty.
pub fn basename(path: &str) -> Option<&str> {
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Literal replacement of the first occurrence only.
pub fn replace_first(haystack: &str, from: &str, to: &str) -> String {
    haystack.replacen(from, to, 1)
}

/// `$APPDIR` → `$out/Applications`
pub fn substitute_appdir(path: &str) -> String {
    replace_first(path, APPDIR, &format!("{OUT}/Applications"))
}

/// Rewrites every Homebrew location a `binary` source may point into.
pub fn substitute_binary_source(path: &str, token: &str, version: &str) -> String {
    let caskroom = format!("$HOMEBREW_PREFIX/Caskroom/{token}/{version}");
    let rewrites = [
        (caskroom.as_str(), OUT.to_string()),
        (
            "$HOMEBREW_PREFIX/etc/bash_completion.d",
            format!("{OUT}/share/bash-completion/completions"),
        ),
        (
            "$HOMEBREW_PREFIX/share/zsh/site-functions",
            format!("{OUT}/share/zsh/site-functions"),
        ),
        (
            "$HOMEBREW_PREFIX/share/fish/vendor_completions.d",
            format!("{OUT}/share/fish/vendor_completions.d"),
        ),
    ];
    rewrites
        .iter()
        .fold(substitute_appdir(path), |acc, (from, to)| {
            replace_first(&acc, from, to)
        })
}

/// Explicit target, else the source's base name.
pub fn target_or_basename<'a>(file: &'a FileSpec, what: &str) -> Result<&'a str, LoweringError> {
    match file.target.as_deref() {
        Some(target) => Ok(target),
        None => basename(&file.name).ok_or_else(|| {
            LoweringError::Unreachable(format!("{what} {} has missing target", file.name))
        }),
    }
}

/// Joins `rel` onto `base` and collapses `.` and `..` segments, so
/// `join_normalized("$out/bin", "../sbin/foo")` is `$out/sbin/foo`. A `..`
/// never climbs above the first segment of `base`.
pub fn join_normalized(base: &str, rel: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    let floor = segments.len().min(1);
    for segment in rel.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.len() > floor {
                    segments.pop();
                }
            }
            name => segments.push(name),
        }
    }
    let joined = segments.join("/");
    if base.starts_with('/') {
        format!("/{joined}")
    } else {
        joined
    }
}

/// `mkdir -p "<dest>" && cp -r "<src>" "<dest>"`
pub fn copy_into(src: &str, dest: &str) -> String {
    format!("mkdir -p \"{dest}\" && cp -r \"{src}\" \"{dest}\"")
}

/// `mkdir -p "<dir>" && ln -s "<src>" "<link>"`
pub fn link_into(dir: &str, src: &str, link: &str) -> String {
    format!("mkdir -p \"{dir}\" && ln -s \"{src}\" \"{link}\"")
}
