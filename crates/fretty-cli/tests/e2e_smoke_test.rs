use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use fretty_cli::{Args, run};

fn samples_dir() -> PathBuf {
    // Samples live at the workspace root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

/// Collects all .fret files from a directory
fn collect_fret_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("fret")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

fn args_for(input: &Path, output: &Path) -> Args {
    let mut args = Args::new(input.to_string_lossy());
    args.output = Some(output.to_string_lossy().to_string());
    args.log_level = "off".to_string();
    args
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_fret_files(&samples_dir());
    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.svg",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args_for(sample_path, &output_path)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).unwrap();
                assert!(svg.starts_with("<svg"), "{}", sample_path.display());
                assert!(svg.contains("viewBox="), "{}", sample_path.display());
            }
            Err(e) => failed_samples.push((sample_path.clone(), e)),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_fret_files(&samples_dir().join("errors"));
    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}.svg",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(sample_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(sample_path.clone());
        }
        assert!(!output_path.exists(), "no partial output for {}", sample_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_render_options_reach_output() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("c-major.svg");

    let mut args = args_for(&samples_dir().join("c-major.fret"), &output_path);
    args.width = Some(200.0);
    args.embedded = true;
    run(&args).unwrap();

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains(r#"width="200""#));
    assert!(!svg.contains("height="));
    assert!(!svg.contains("xmlns"));
}

#[test]
fn e2e_unknown_mode_fails_before_reading_input() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("out.svg");

    let mut args = args_for(&temp_dir.path().join("does-not-exist.fret"), &output_path);
    args.mode = "pdf".to_string();

    let err = run(&args).unwrap_err();
    assert!(matches!(err, fretty::FrettyError::UnknownProcessorMode(mode) if mode == "pdf"));
}

#[test]
fn e2e_html_document_with_image_tag() {
    let temp_dir = tempdir().unwrap();
    let input_path = temp_dir.path().join("page.html");
    let output_path = temp_dir.path().join("out").join("page.html");
    fs::create_dir(output_path.parent().unwrap()).unwrap();

    fs::write(
        &input_path,
        "<html><body><br>\n<fretty>Am\n-(1)\n--(2)</fretty>\n\
         <FRETTY image=\"em.svg\" width=\"100\">Em\n--(2)</FRETTY>\n</body></html>",
    )
    .unwrap();

    let mut args = args_for(&input_path, &output_path);
    args.mode = "HTML".to_string();
    run(&args).unwrap();

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.starts_with("<html><body><br>"));
    assert!(html.contains("<svg"));
    assert!(html.contains(r#"<img src="em.svg" width="100""#));
    assert!(!html.to_ascii_lowercase().contains("<fretty"));

    let image = fs::read_to_string(output_path.parent().unwrap().join("em.svg")).unwrap();
    assert!(image.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
}

#[test]
fn e2e_xml_document_with_bad_notation_fails() {
    let temp_dir = tempdir().unwrap();
    let input_path = temp_dir.path().join("doc.xml");
    let output_path = temp_dir.path().join("doc.out.xml");
    fs::write(&input_path, "<doc><fretty>G\n--(3</fretty></doc>").unwrap();

    let mut args = args_for(&input_path, &output_path);
    args.mode = "xml".to_string();

    let err = run(&args).unwrap_err();
    assert!(matches!(err, fretty::FrettyError::Parse { .. }));
    assert!(!output_path.exists());
}
