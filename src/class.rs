use anyhow::Result;
use std::path::Path;

use crate::config::RenameOptions;
use crate::result::RenameResult;
use crate::rewrite::{Pass, SPACE, WORD, literal, rewrite_file};
use crate::scan::scan_source_files;

pub fn rename_class(root: &Path, old_class: &str, new_class: &str) -> Result<RenameResult> {
    rename_class_with(root, old_class, new_class, &RenameOptions::default())
}

/// Rewrites the definition, references and constructor calls of `old_class`
/// in every source file under `root`. Classes are not moved on disk.
pub fn rename_class_with(
    root: &Path,
    old_class: &str,
    new_class: &str,
    options: &RenameOptions,
) -> Result<RenameResult> {
    let mut result = RenameResult::new();
    let passes = class_passes(old_class, new_class)?;

    for file in scan_source_files(root, &options.extension)? {
        rewrite_file(&file, &passes, options, &mut result)?;
    }

    Ok(result)
}

/// Pass order matters: definition, then references, then constructors.
pub fn class_passes(old_class: &str, new_class: &str) -> Result<Vec<Pass>> {
    let old = literal(old_class);

    let definition = format!("class {new_class} ");
    let reference = new_class.to_string();
    // Always a single space before the parenthesis, whatever the input had.
    let constructor = format!("new {new_class} (");

    Ok(vec![
        Pass::first(
            "class definition",
            &format!(r"(?<!{WORD})class{SPACE}+{old}{SPACE}+"),
            move |_| definition.clone(),
        )?,
        Pass::all(
            "class references",
            &format!(r"(?<!{WORD}){old}(?!{WORD})"),
            move |_| reference.clone(),
        )?,
        Pass::all(
            "constructor references",
            &format!(r"(?<!{WORD})new{SPACE}+{old}{SPACE}*\("),
            move |_| constructor.clone(),
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "java-renamer-class-{}-{}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos(),
            COUNTER.fetch_add(1, Ordering::Relaxed),
            name
        ))
    }

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn rename_class_rewrites_definition_and_references() -> Result<()> {
        let root = temp_dir("e2e");
        let file = root.join("com/example/Foo.java");
        write_file(&file, "class Foo { Foo() {} } Foo f = new Foo();");

        let result = rename_class(&root, "Foo", "Bar")?;

        // The reference pass already renamed the constructor call, so the
        // constructor pass has nothing left to match.
        assert_eq!(
            fs::read_to_string(&file)?,
            "class Bar { Bar() {} } Bar f = new Bar();"
        );
        assert_eq!(
            result.changed_files(),
            [
                format!("Modified class definition in: {}", file.display()),
                format!("Modified class references in: {}", file.display()),
            ]
        );
        assert!(!result.has_issues());

        let _ = fs::remove_dir_all(root);
        Ok(())
    }

    #[test]
    fn rename_class_does_not_touch_longer_identifiers() -> Result<()> {
        let root = temp_dir("substrings");
        let file = root.join("Uses.java");
        let original = "class FooBar extends MyFoo { Foo_ x; Foo2 y; }";
        write_file(&file, original);

        let result = rename_class(&root, "Foo", "Bar")?;

        assert_eq!(fs::read_to_string(&file)?, original);
        assert!(result.changed_files().is_empty());

        let _ = fs::remove_dir_all(root);
        Ok(())
    }

    #[test]
    fn rename_class_only_logs_files_that_change() -> Result<()> {
        let root = temp_dir("mixed");
        let user = root.join("a/User.java");
        let other = root.join("b/Other.java");
        write_file(&user, "import com.example.Foo;\nFoo f;\n");
        write_file(&other, "class Other {}\n");

        let result = rename_class(&root, "Foo", "Bar")?;

        assert_eq!(fs::read_to_string(&user)?, "import com.example.Bar;\nBar f;\n");
        assert_eq!(fs::read_to_string(&other)?, "class Other {}\n");
        assert_eq!(
            result.changed_files(),
            [format!("Modified class references in: {}", user.display())]
        );

        let _ = fs::remove_dir_all(root);
        Ok(())
    }

    #[test]
    fn rename_class_skips_other_extensions() -> Result<()> {
        let root = temp_dir("extensions");
        let notes = root.join("notes.txt");
        write_file(&notes, "Foo");
        write_file(&root.join("Foo.java"), "class Foo {}");

        let result = rename_class(&root, "Foo", "Bar")?;

        assert_eq!(fs::read_to_string(&notes)?, "Foo");
        assert_eq!(result.changed_files().len(), 1);

        let _ = fs::remove_dir_all(root);
        Ok(())
    }

    #[test]
    fn rename_class_with_custom_extension_and_dry_run() -> Result<()> {
        let root = temp_dir("kt-dry");
        let file = root.join("Foo.kt");
        write_file(&file, "class Foo\nval f = Foo()\n");
        let options = RenameOptions {
            extension: "kt".to_string(),
            dry_run: true,
        };

        let result = rename_class_with(&root, "Foo", "Bar", &options)?;

        assert_eq!(fs::read_to_string(&file)?, "class Foo\nval f = Foo()\n");
        assert_eq!(
            result.changed_files(),
            [
                format!("[SIMULATED] Modified class definition in: {}", file.display()),
                format!("[SIMULATED] Modified class references in: {}", file.display()),
            ]
        );

        let _ = fs::remove_dir_all(root);
        Ok(())
    }

    #[test]
    fn definition_pass_replaces_first_match_with_single_space() -> Result<()> {
        let passes = class_passes("Foo", "Bar")?;
        assert_eq!(
            passes[0].apply("public class   Foo\n{ } class Foo {}")?,
            "public class Bar { } class Foo {}"
        );
        assert_eq!(passes[0].apply("subclass Foo {}")?, "subclass Foo {}");
        assert_eq!(passes[0].apply("class Foo{}")?, "class Foo{}");
        Ok(())
    }

    #[test]
    fn definition_and_constructor_passes_only_accept_ascii_whitespace() -> Result<()> {
        let passes = class_passes("Foo", "Bar")?;
        assert_eq!(
            passes[0].apply("class\u{00A0}Foo {}")?,
            "class\u{00A0}Foo {}"
        );
        assert_eq!(passes[0].apply("class\tFoo\x0c{}")?, "class Bar {}");
        assert_eq!(
            passes[2].apply("new\u{2003}Foo()")?,
            "new\u{2003}Foo()"
        );
        Ok(())
    }

    #[test]
    fn constructor_pass_normalizes_spacing_before_parenthesis() -> Result<()> {
        let passes = class_passes("Foo", "Bar")?;
        assert_eq!(
            passes[2].apply("a = new   Foo  (1); b = new Foo(); renew Foo();")?,
            "a = new Bar (1); b = new Bar (); renew Foo();"
        );
        Ok(())
    }

    #[test]
    fn class_name_metacharacters_are_literal() -> Result<()> {
        let passes = class_passes("Foo$Impl", "Bar")?;
        assert_eq!(
            passes[1].apply("Foo$Impl x; FooImpl y;")?,
            "Bar x; FooImpl y;"
        );
        Ok(())
    }
}
