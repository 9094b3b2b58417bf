//test-amplicon_coverage.rs
use std::fs;
use std::process::Command;

#[test]
fn test_amplicon_coverage_writes_report() {
    let exe = env!("CARGO_BIN_EXE_amplicon-coverage");
    let dir = tempfile::tempdir().expect("tempdir");

    let bed = dir.path().join("panel.bed");
    let pileup = dir.path().join("sample.mpileup");
    let out = dir.path().join("report.txt");
    fs::write(
        &bed,
        "chr1\t10\t12\tchr1:10-12\t.\t.\tAMPL1\tGENE1\n\
         chr1\t40\t42\tchr1:40-42\t.\t.\tAMPL2\tGENE2\n",
    )
    .unwrap();
    fs::write(
        &pileup,
        "chr1\t11\tA\t500\t...\tIII\n\
         chr1\t12\tA\t700\t...\tIII\n\
         chr1\t41\tA\t700\t...\tIII\n",
    )
    .unwrap();

    let output = Command::new(exe)
        .arg("-b").arg(&bed)
        .arg("-m").arg(&pileup)
        .arg("-c").arg("400")
        .arg("-o").arg(&out)
        .output()
        .expect("Failed to run amplicon-coverage");

    if !output.status.success() {
        panic!(
            "amplicon-coverage failed.\nstatus: {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }

    let report = fs::read_to_string(&out).expect("read report");
    assert_eq!(
        report,
        "The listed amplicons were not completely covered at the required coverage (400X)\n\
         chr1\t40\t42\tAMPL2\n\
         The remaining 1 amplicons were covered above the required coverage (400X)\n"
    );
}

#[test]
fn test_amplicon_coverage_fails_on_seven_columns() {
    let exe = env!("CARGO_BIN_EXE_amplicon-coverage");
    let dir = tempfile::tempdir().expect("tempdir");

    let bed = dir.path().join("panel.bed");
    let pileup = dir.path().join("sample.mpileup");
    let out = dir.path().join("report.txt");
    fs::write(&bed, "chr1\t10\t12\tchr1:10-12\t.\t.\tAMPL1\n").unwrap();
    fs::write(&pileup, "chr1\t11\tA\t500\t...\tIII\n").unwrap();

    let output = Command::new(exe)
        .args(["--regions", bed.to_str().unwrap()])
        .args(["--depth", pileup.to_str().unwrap()])
        .args(["--min-depth", "400"])
        .args(["--output", out.to_str().unwrap()])
        .output()
        .expect("Failed to run amplicon-coverage");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "stderr was: {stderr}");
    assert!(stderr.contains("expected 8 tab separated fields, found 7"), "stderr was: {stderr}");
    assert!(!out.exists());
}

#[test]
fn test_amplicon_coverage_requires_all_arguments() {
    let exe = env!("CARGO_BIN_EXE_amplicon-coverage");
    let output = Command::new(exe)
        .args(["-b", "panel.bed", "-m", "sample.mpileup"])
        .output()
        .expect("Failed to run amplicon-coverage");
    assert!(!output.status.success());
}
