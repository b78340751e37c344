use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_travelog"))
}

struct TestEnv {
    _root: TempDir,
    config_home: PathBuf,
    data_home: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let config_home = root.path().join("config");
        let data_home = root.path().join("data");
        std::fs::create_dir_all(&config_home).expect("config dir");
        std::fs::create_dir_all(&data_home).expect("data dir");
        Self {
            _root: root,
            config_home,
            data_home,
        }
    }

    fn data_file(&self) -> PathBuf {
        self.data_home.join("travelog").join("travelEntries.json")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(bin())
            .args(args)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("XDG_DATA_HOME", &self.data_home)
            .env_remove("TRAVELOG_DATA_DIR")
            .env_remove("TRAVELOG_CONFIG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::null())
            .output()
            .expect("run travelog")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "travelog {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn add(&self, args: &[&str]) -> String {
        let mut full = vec!["add"];
        full.extend_from_slice(args);
        let stdout = self.run_ok(&full);
        entry_id(&stdout)
    }
}

fn entry_id(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("entry_id="))
        .map(str::to_string)
        .unwrap_or_else(|| panic!("no entry_id in output:\n{}", stdout))
}

fn write_png(dir: &Path) -> PathBuf {
    let path = dir.join("louvre.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).expect("write png");
    path
}

#[test]
fn add_list_show_round_trip() {
    let env = TestEnv::new();
    let id = env.add(&[
        "Paris, France",
        "--start",
        "2024-06-01",
        "--end",
        "2024-06-07",
        "--notes",
        "Great food",
        "--lat",
        "48.5",
        "--lng",
        "2.25",
    ]);

    let list = env.run_ok(&["list"]);
    assert_eq!(
        list.trim(),
        format!("{}\t2024-06-01\t2024-06-07\t6 Days\tParis, France", id)
    );

    let show = env.run_ok(&["show", &id[..8]]);
    assert!(show.contains("destination=Paris, France"));
    assert!(show.contains("notes=Great food"));
    assert!(show.contains("lat=48.5"));

    let blob = std::fs::read_to_string(env.data_file()).expect("data file");
    let stored: serde_json::Value = serde_json::from_str(&blob).expect("json array");
    assert_eq!(stored[0]["startDate"], "2024-06-01");
    assert_eq!(stored[0]["coordinates"]["lat"], 48.5);
}

#[test]
fn list_json_is_newest_first_with_labels() {
    let env = TestEnv::new();
    env.add(&["Rome", "--start", "2023-03-01", "--end", "2023-03-15"]);
    env.add(&["Oslo", "--start", "2024-01-10"]);

    let stdout = env.run_ok(&["list", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(entries[0]["destination"], "Oslo");
    assert_eq!(entries[0]["durationLabel"], "Day Trip");
    assert_eq!(entries[1]["durationLabel"], "2 Weeks");
    assert!(entries[1]["coordinates"].is_null());
}

#[test]
fn edit_updates_fields() {
    let env = TestEnv::new();
    let id = env.add(&["Lisbon", "--start", "2024-05-01", "--end", "2024-05-03"]);

    let stdout = env.run_ok(&["edit", &id, "--destination", "Porto", "--notes", "Port wine"]);
    assert!(stdout.contains("status=ok"));

    let show = env.run_ok(&["show", &id, "--json"]);
    let entry: serde_json::Value = serde_json::from_str(&show).expect("json");
    assert_eq!(entry["destination"], "Porto");
    assert_eq!(entry["notes"], "Port wine");
    assert!(entry["updatedAt"].is_string());

    let unchanged = env.run(&["edit", &id]);
    assert_eq!(unchanged.status.code(), Some(4));
}

#[test]
fn delete_without_tty_is_immediate_and_repeat_is_not_found() {
    let env = TestEnv::new();
    let id = env.add(&["Berlin", "--start", "2024-02-01"]);

    let stdout = env.run_ok(&["delete", &id]);
    assert!(stdout.contains("status=ok"));
    assert!(env.run_ok(&["list"]).trim().is_empty());

    let again = env.run(&["delete", &id]);
    assert_eq!(again.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&again.stderr).contains("error="));
}

#[test]
fn invalid_input_exits_with_code_4() {
    let env = TestEnv::new();

    let backwards = env.run(&["add", "Tokyo", "--start", "2024-06-07", "--end", "2024-06-01"]);
    assert_eq!(backwards.status.code(), Some(4));

    let bad_date = env.run(&["add", "Tokyo", "--start", "next tuesday"]);
    assert_eq!(bad_date.status.code(), Some(4));

    let blank = env.run(&["add", "   ", "--start", "2024-06-01"]);
    assert_eq!(blank.status.code(), Some(4));

    let bad_lat = env.run(&["add", "Tokyo", "--start", "2024-06-01", "--lat", "91", "--lng", "0"]);
    assert_eq!(bad_lat.status.code(), Some(4));

    assert!(!env.data_file().exists());
}

#[test]
fn unknown_id_exits_with_code_3() {
    let env = TestEnv::new();
    let output = env.run(&["show", "does-not-exist"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn map_lists_only_located_trips() {
    let env = TestEnv::new();
    let paris = env.add(&["Paris", "--start", "2024-06-01", "--lat", "48.5", "--lng", "2.25"]);
    let home = env.add(&["Home", "--start", "2024-07-01"]);

    let stdout = env.run_ok(&["map", "--json"]);
    let map: serde_json::Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(map["zoom"], 2);
    assert_eq!(map["markers"].as_array().map(Vec::len), Some(1));
    assert_eq!(map["markers"][0]["id"], paris.as_str());

    let selected = env.run_ok(&["map", "--select", &paris]);
    assert!(selected.contains(&format!("selected={}", paris)));

    let unpinned = env.run(&["map", "--select", &home]);
    assert_eq!(unpinned.status.code(), Some(4));
}

#[test]
fn images_are_stored_as_data_uris() {
    let env = TestEnv::new();
    let png = write_png(&env.data_home);
    let id = env.add(&[
        "Paris",
        "--start",
        "2024-06-01",
        "--image",
        png.to_str().expect("utf8 path"),
    ]);

    let show = env.run_ok(&["show", &id, "--json"]);
    let entry: serde_json::Value = serde_json::from_str(&show).expect("json");
    let image = entry["images"][0].as_str().expect("image string");
    assert!(image.starts_with("data:image/png;base64,"));

    let stdout = env.run_ok(&["edit", &id, "--remove-image", "1"]);
    assert!(stdout.contains("status=ok"));
    let show = env.run_ok(&["show", &id]);
    assert!(show.contains("images=0"));

    let not_image = env.data_home.join("notes.txt");
    std::fs::write(&not_image, "hello").expect("write");
    let rejected = env.run(&["edit", &id, "--image", not_image.to_str().expect("utf8")]);
    assert_eq!(rejected.status.code(), Some(4));
}

#[test]
fn corrupt_data_file_loads_empty() {
    let env = TestEnv::new();
    let file = env.data_file();
    std::fs::create_dir_all(file.parent().expect("parent")).expect("dir");
    std::fs::write(&file, "{not json").expect("write");

    let output = env.run(&["list"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn init_sets_default_view() {
    let env = TestEnv::new();
    let data_dir = env.data_home.join("trips");
    env.run_ok(&[
        "init",
        data_dir.to_str().expect("utf8"),
        "--view",
        "map",
        "--undo-seconds",
        "8",
    ]);

    let config =
        std::fs::read_to_string(env.config_home.join("travelog").join("config.toml")).expect("config");
    assert!(config.contains("default_view = \"map\""));
    assert!(config.contains("undo_window_seconds = 8"));

    let again = env.run(&["init"]);
    assert_eq!(again.status.code(), Some(4));

    env.add(&["Quito", "--start", "2024-09-01", "--lat", "-0.25", "--lng", "-78.5"]);
    assert!(data_dir.join("travelEntries.json").exists());

    let dashboard = env.run_ok(&[]);
    assert!(dashboard.starts_with("view=map\nentries=1"));
    let toggled = env.run_ok(&["dashboard", "--toggle"]);
    assert!(toggled.starts_with("view=list"));
}

#[test]
fn data_dir_flag_overrides_default() {
    let env = TestEnv::new();
    let custom = env.data_home.join("elsewhere");
    let custom_str = custom.to_str().expect("utf8");
    env.run_ok(&["--data-dir", custom_str, "add", "Cairo", "--start", "2024-04-01"]);

    assert!(custom.join("travelEntries.json").exists());
    assert!(!env.data_file().exists());
}

#[test]
fn completions_mention_binary() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["completions", "bash"]);
    assert!(stdout.contains("travelog"));
}
