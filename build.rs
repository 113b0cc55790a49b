use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/plates/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("plates.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let plate_dir = Path::new("assets").join("plates");
    if !plate_dir.exists() {
        writeln!(f, "pub const PLATES: &[(&str, &str)] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(&plate_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();

    // Stable table order regardless of directory iteration order
    entries.sort();

    writeln!(f, "pub const PLATES: &[(&str, &str)] = &[").unwrap();
    for path in entries {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap()
            .to_string();
        let content = fs::read_to_string(&path).unwrap();
        // Trailing blank lines would only pad the vertical centering
        let content = content.trim_end_matches(['\n', '\r']);
        writeln!(f, "    ({:?}, {:?}),", name, content).unwrap();
    }
    writeln!(f, "];").unwrap();
}
