//! Tests for profile parsing and serialization.

use crate::profile::{DEFAULT_SECTION, Profile, parse, serialize};

const CONAN_PROFILE: &str = r#"include(default)

[settings]
os=Linux
arch=x86_64
compiler=gcc
compiler.version=13
build_type=Release

# packages pulled in for every build
[tool_requires]
cmake/3.27.1
ninja/1.11.1

[conf]
tools.build:jobs=8
"#;

#[test]
fn test_new_profile_has_default_section() {
    let profile = Profile::new();

    assert_eq!(profile.len(), 1);
    assert!(profile.section(DEFAULT_SECTION).unwrap().is_empty());
}

#[test]
fn test_parse_empty_input() {
    let profile = parse("");

    assert_eq!(profile, Profile::new());
    assert_eq!(serialize(&profile), "");
}

#[test]
fn test_parse_sections_in_order() {
    let profile = parse(CONAN_PROFILE);

    let names: Vec<&str> = profile.sections().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["", "settings", "tool_requires", "conf"]);
}

#[test]
fn test_parse_default_section_content() {
    let profile = parse(CONAN_PROFILE);

    assert_eq!(
        profile.section(DEFAULT_SECTION).unwrap().bare_lines(),
        ["include(default)"]
    );
}

#[test]
fn test_parse_settings_preserve_order() {
    let profile = parse(CONAN_PROFILE);
    let settings = profile.section("settings").unwrap();

    let keys: Vec<&str> = settings.settings().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec!["os", "arch", "compiler", "compiler.version", "build_type"]
    );
    assert_eq!(settings.get("compiler.version"), Some("13"));
}

#[test]
fn test_parse_skips_comments_and_blank_lines() {
    let profile = parse("# leading comment\n\n   \n[settings]\n   # indented comment\nos=Linux\n");

    let settings = profile.section("settings").unwrap();
    assert_eq!(settings.settings().count(), 1);
    assert!(settings.bare_lines().is_empty());
}

#[test]
fn test_parse_trims_lines() {
    let profile = parse("  [settings]  \n\tos=Linux  \n");

    assert_eq!(profile.section("settings").unwrap().get("os"), Some("Linux"));
}

#[test]
fn test_parse_keeps_spaces_around_equals() {
    let profile = parse("[settings]\nos = Linux\n");
    let settings = profile.section("settings").unwrap();

    assert_eq!(settings.get("os "), Some(" Linux"));
    assert_eq!(serialize(&profile), "[settings]\nos = Linux\n");
}

#[test]
fn test_parse_first_equals_wins() {
    let profile = parse("[conf]\nkey=a=b\n");

    assert_eq!(profile.section("conf").unwrap().get("key"), Some("a=b"));
}

#[test]
fn test_parse_repeated_key_updates_in_place() {
    let profile = parse("[settings]\nos=Linux\narch=x86_64\nos=Windows\n");
    let settings = profile.section("settings").unwrap();

    let pairs: Vec<(&str, &str)> = settings.settings().collect();
    assert_eq!(pairs, vec![("os", "Windows"), ("arch", "x86_64")]);
}

#[test]
fn test_parse_repeated_header_discards_earlier_content() {
    let profile = parse("[settings]\nos=Linux\n[options]\nshared=True\n[settings]\narch=armv8\n");

    let names: Vec<&str> = profile.sections().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["", "settings", "options"]);

    let settings = profile.section("settings").unwrap();
    assert_eq!(settings.get("os"), None);
    assert_eq!(settings.get("arch"), Some("armv8"));
}

#[test]
fn test_parse_empty_header_targets_default_section() {
    let profile = parse("include(default)\n[settings]\nos=Linux\n[]\nbuild_type=Debug\n");

    assert_eq!(profile.len(), 2);
    let default = profile.section(DEFAULT_SECTION).unwrap();
    assert!(default.bare_lines().is_empty());
    assert_eq!(default.get("build_type"), Some("Debug"));
}

#[test]
fn test_parse_ignores_text_after_header() {
    let profile = parse("[settings] trailing\nos=Linux\n");

    assert!(profile.section("settings").is_some());
}

#[test]
fn test_parse_bare_lines_preserved() {
    let profile = parse("[build_requires]\npkgA/1.0\npkgB/2.0\n");

    assert_eq!(
        profile.section("build_requires").unwrap().bare_lines(),
        ["pkgA/1.0", "pkgB/2.0"]
    );
    assert_eq!(
        serialize(&profile),
        "[build_requires]\npkgA/1.0\npkgB/2.0\n"
    );
}

#[test]
fn test_serialize_settings_before_bare_lines() {
    let profile = parse("[mixed]\nflag\nkey=value\n");

    assert_eq!(serialize(&profile), "[mixed]\nkey=value\nflag\n");
}

#[test]
fn test_serialize_full_profile() {
    let profile = parse(CONAN_PROFILE);

    let expected = "include(default)

[settings]
os=Linux
arch=x86_64
compiler=gcc
compiler.version=13
build_type=Release

[tool_requires]
cmake/3.27.1
ninja/1.11.1

[conf]
tools.build:jobs=8
";
    assert_eq!(serialize(&profile), expected);
}

#[test]
fn test_serialize_keeps_empty_sections() {
    let profile = parse("[settings]\n[options]\nshared=True\n");

    assert_eq!(serialize(&profile), "[settings]\n\n[options]\nshared=True\n");
}

#[test]
fn test_display_matches_serialize() {
    let profile = parse(CONAN_PROFILE);

    assert_eq!(profile.to_string(), serialize(&profile));
}

#[test]
fn test_round_trip_is_structurally_equal() {
    let inputs = [
        CONAN_PROFILE,
        "",
        "os=Linux\n",
        "[a]\n[b]\n[a]\nx=1\n",
        "[conf]\nkey=a=b\nflag\n",
        "# only a comment\n",
    ];

    for input in inputs {
        let first = parse(input);
        let second = parse(&serialize(&first));
        assert_eq!(first, second, "round trip changed profile for {:?}", input);
    }
}

#[test]
fn test_section_mut_edits_existing_section() {
    let mut profile = parse("[settings]\nos=Linux\n");

    let settings = profile.section_mut("settings").unwrap();
    settings.set("os", "Windows");
    settings.push_bare("include(base)");

    assert_eq!(
        serialize(&profile),
        "[settings]\nos=Windows\ninclude(base)\n"
    );
    assert!(profile.section_mut("options").is_none());
    assert_eq!(profile.len(), 2);
}

#[test]
fn test_equality_is_order_sensitive() {
    assert_ne!(parse("[a]\n[b]\n"), parse("[b]\n[a]\n"));
    assert_ne!(parse("[s]\nx=1\ny=2\n"), parse("[s]\ny=2\nx=1\n"));
    assert_ne!(parse("[s]\npkgA\npkgB\n"), parse("[s]\npkgB\npkgA\n"));
    assert_eq!(parse("[s]\nx=1\ny=2\n"), parse("\n[s]\nx=1\n\ny=2\n"));
}

#[test]
fn test_serialize_is_stable() {
    let once = serialize(&parse(CONAN_PROFILE));
    let twice = serialize(&parse(&once));

    assert_eq!(once, twice);
}

#[test]
fn test_profile_serializes_to_json() {
    let profile = parse("[settings]\nos=Linux\n[tool_requires]\ncmake/3.27.1\n");

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["settings"]["settings"]["os"], "Linux");
    assert_eq!(json["tool_requires"]["bare_lines"][0], "cmake/3.27.1");
    assert!(json[""]["bare_lines"].as_array().unwrap().is_empty());
}
