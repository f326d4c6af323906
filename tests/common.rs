#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mmpbquiz::models::{Question, QuestionRecord};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "image_path,description_moderate,preference,question,answer,A,B,C,D,category,attribute,l2-category";

pub fn quiz() -> Command {
    cargo_bin_cmd!("mmpbquiz")
}

/// A scratch directory with a `data/` image root, removed and recreated per test.
pub struct Fixture {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub csv: PathBuf,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let mut root: PathBuf = env::temp_dir();
        root.push(format!("mmpbquiz_{}", name));
        fs::remove_dir_all(&root).ok();

        let data_dir = root.join("data");
        fs::create_dir_all(&data_dir).expect("create data dir");

        Self {
            csv: root.join("dataset.csv"),
            root,
            data_dir,
        }
    }

    /// Write a small valid PNG under the data directory.
    pub fn image(&self, rel: &str) -> PathBuf {
        let path = self.data_dir.join(rel);
        write_png(&path);
        path
    }

    /// Write a file with a `.png` name that is not an image.
    pub fn broken_image(&self, rel: &str) -> PathBuf {
        let path = self.data_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"definitely not a png").unwrap();
        path
    }

    pub fn write_csv(&self, header: &str, rows: &[&str]) -> &Path {
        let mut content = String::from(header);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(&self.csv, content).expect("write csv");
        &self.csv
    }

    pub fn csv_str(&self) -> String {
        self.csv.to_string_lossy().to_string()
    }

    pub fn data_dir_str(&self) -> String {
        self.data_dir.to_string_lossy().to_string()
    }

    pub fn out(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

pub fn write_png(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbImage::new(4, 3).save(path).expect("write png");
}

/// A record with lettered options.
pub fn lettered(answer: &str, options: [&str; 4], category: &str) -> QuestionRecord {
    QuestionRecord {
        image_path: "test/img.png".into(),
        question: "Which one?".into(),
        answer: answer.into(),
        a: options[0].into(),
        b: options[1].into(),
        c: options[2].into(),
        d: options[3].into(),
        category: category.into(),
        attribute: format!("{category}-attr"),
        l2_category: format!("{category}-l2"),
        ..Default::default()
    }
}

/// A record without options (Yes/No question).
pub fn yes_no(answer: &str, category: &str) -> QuestionRecord {
    QuestionRecord {
        image_path: "test/img.png".into(),
        question: "Is it?".into(),
        answer: answer.into(),
        category: category.into(),
        ..Default::default()
    }
}

pub fn question(record: QuestionRecord) -> Question {
    Question::new(record, PathBuf::from("/nonexistent/test/img.png"))
}
