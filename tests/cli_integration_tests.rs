//! End-to-end tests for the paperplot binary: output formats and exit codes.

mod common;

use common::{BASIC_CHART, CLUSTERED_CHART, TestFixture};
use predicates::prelude::*;

fn json_stdout(assert: &assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

// ============================================================================
// layout
// ============================================================================

#[test]
fn layout_text_output() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(BASIC_CHART);

    paperplot!()
        .arg("layout")
        .arg(&chart)
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("stacked"))
        .stdout(predicate::str::contains(
            "entry 1: left=-0.4000 bottom=1.0000 width=0.8000 height=3.0000",
        ));
}

#[test]
fn layout_json_stacked_rects() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(BASIC_CHART);

    let assert = paperplot!()
        .args(["layout", "-f", "json"])
        .arg(&chart)
        .assert()
        .success();
    let value = json_stdout(&assert);

    assert_eq!(value["mode"], "stacked");
    assert_eq!(value["entries"][1][0]["bottom"], 1.0);
    assert_eq!(value["entries"][1][0]["height"], 3.0);
    assert_eq!(value["xlim"], serde_json::json!([-1.0, 3.0]));
}

#[test]
fn layout_writes_output_file() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(BASIC_CHART);
    let out = fixture.path().join("layout.json");

    paperplot!()
        .args(["layout", "-f", "json", "-o"])
        .arg(&out)
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(fixture.read_file("layout.json").contains("\"stacked\""));
}

#[test]
fn quiet_suppresses_stdout() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(BASIC_CHART);

    paperplot!()
        .args(["--quiet", "layout"])
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// plan
// ============================================================================

#[test]
fn plan_json_center_anchor() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(CLUSTERED_CHART);

    let assert = paperplot!()
        .args(["plan", "-f", "json", "--anchor", "center"])
        .arg(&chart)
        .assert()
        .success();
    let value = json_stdout(&assert);

    assert_eq!(value["anchor"], "center");
    let bar = &value["series"][0]["bars"][0];
    assert_eq!(bar["rect"]["width"], 0.2);
    assert!((bar["x"].as_f64().unwrap() - (-0.2)).abs() < 1e-12);
    assert!(value["series"][0]["edge"].is_null());
    assert_eq!(value["series"][0]["hatch"]["pattern"], "//");
    assert_eq!(value["style"]["font_family"], "monospace");
    assert_eq!(value["style"]["font_size"], 8.0);
}

#[test]
fn plan_text_shows_legend() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(BASIC_CHART);

    paperplot!()
        .args(["plan", "--color", "never"])
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::contains("x, y (upper right, 1 column(s))"))
        .stdout(predicate::str::contains("a, b, c"));
}

// ============================================================================
// palette / figsize
// ============================================================================

#[test]
fn palette_default_colors() {
    paperplot!()
        .args(["palette", "-n", "3", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#386cb0"))
        .stdout(predicate::str::contains("#f0027f"))
        .stdout(predicate::str::contains("#beaed4").not());
}

#[test]
fn palette_scale_json() {
    let assert = paperplot!()
        .args(["palette", "--base", "#ff0000", "-n", "2", "--low", "0.0", "--high", "1.0"])
        .args(["-f", "json"])
        .assert()
        .success();
    let value = json_stdout(&assert);

    assert_eq!(value["colors"], serde_json::json!(["#000000", "#ff0000"]));
}

#[test]
fn palette_always_color_emits_swatches() {
    paperplot!()
        .args(["palette", "-n", "1", "--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[48;2;"));
}

#[test]
fn figsize_text() {
    paperplot!()
        .args(["figsize", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.3889 x 0.8584 in"));
}

// ============================================================================
// exit codes
// ============================================================================

#[test]
fn invalid_shrink_exits_with_validation_error() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(
        "data = [[1.0, 2.0]]\n[layout]\nbreakdown = false\ncluster_shrink = 1.2\n",
    );

    paperplot!()
        .arg("layout")
        .arg(&chart)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cluster_shrink"));
}

#[test]
fn stacked_chart_ignores_cluster_shrink() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(
        "data = [[1.0, 3.0], [2.0, 4.0]]\n[layout]\ncluster_shrink = 0.5\n",
    );

    let assert = paperplot!()
        .args(["layout", "-f", "json"])
        .arg(&chart)
        .assert()
        .success();
    let value = json_stdout(&assert);

    assert_eq!(value["mode"], "stacked");
    assert_eq!(value["entries"][1][0]["left"], -0.4);
    assert_eq!(value["entries"][1][0]["width"], 0.8);
}

#[test]
fn non_finite_cell_exits_with_config_error() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart("data = [[1.0, nan], [2.0, 4.0]]\n");

    paperplot!()
        .args(["layout", "-f", "json"])
        .arg(&chart)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("data[0][1] (group 0, entry 1) must be finite"));
}

#[test]
fn xticks_mismatch_exits_with_validation_error() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart(
        "data = [[1.0], [2.0], [3.0]]\n[layout]\nxticks = [0.0, 1.0]\n",
    );

    paperplot!()
        .arg("layout")
        .arg(&chart)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Size mismatch: xticks"));
}

#[test]
fn too_many_default_colors_exits_with_validation_error() {
    paperplot!()
        .args(["palette", "-n", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not enough default colors"));
}

#[test]
fn invalid_hatch_exits_with_validation_error() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart("data = [[1.0]]\n[appearance]\nhatches = [\"ab\"]\n");

    paperplot!()
        .arg("plan")
        .arg(&chart)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid hatch pattern"));
}

#[test]
fn missing_chart_exits_with_config_error() {
    let fixture = TestFixture::new();

    paperplot!()
        .arg("layout")
        .arg(fixture.path().join("missing.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn unknown_key_exits_with_config_error() {
    let fixture = TestFixture::new();
    let chart = fixture.create_chart("data = [[1.0]]\nbars = 3\n");

    paperplot!()
        .arg("layout")
        .arg(&chart)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn negative_figure_width_exits_with_validation_error() {
    paperplot!()
        .args(["figsize", "--", "-10"])
        .assert()
        .code(1);
}
