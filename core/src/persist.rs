use crate::{PageId, RankVector, RelevanceIndex};
use anyhow::Result;
use bincode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_pages: u32,
    pub created_at: String,
    pub version: u32,
}

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn titles(&self) -> PathBuf { self.root.join("titles.bin") }
    fn relevance(&self) -> PathBuf { self.root.join("relevance.bin") }
    fn ranks(&self) -> PathBuf { self.root.join("ranks.bin") }
    fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

/// The title table is a BTreeMap so write/read iteration order is stable;
/// deterministic top-K tie resolution in tests depends on it.
pub fn save_titles(paths: &IndexPaths, titles: &BTreeMap<PageId, String>) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.titles())?;
    let bytes = bincode::serialize(titles)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_titles(paths: &IndexPaths) -> Result<BTreeMap<PageId, String>> {
    let mut f = File::open(paths.titles())?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let titles = bincode::deserialize(&buf)?;
    Ok(titles)
}

pub fn save_relevance(paths: &IndexPaths, index: &RelevanceIndex) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.relevance())?;
    let bytes = bincode::serialize(index)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_relevance(paths: &IndexPaths) -> Result<RelevanceIndex> {
    let mut f = File::open(paths.relevance())?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let index = bincode::deserialize(&buf)?;
    Ok(index)
}

pub fn save_ranks(paths: &IndexPaths, ranks: &RankVector) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.ranks())?;
    let bytes = bincode::serialize(ranks)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_ranks(paths: &IndexPaths) -> Result<RankVector> {
    let mut f = File::open(paths.ranks())?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let ranks = bincode::deserialize(&buf)?;
    Ok(ranks)
}

pub fn save_meta(paths: &IndexPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &IndexPaths) -> Result<MetaFile> {
    let mut f = File::open(paths.meta())?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}
