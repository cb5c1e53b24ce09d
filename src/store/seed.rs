//! Sample notes inserted into an empty store on first initialization.

use serde::Deserialize;

/// A note template used to seed an empty store.
///
/// Deserializable so custom seed sets can be loaded from a config-pointed
/// TOML file instead of the built-in samples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedNote {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: String,
}

impl SeedNote {
    fn new(title: &str, content: &str, tags: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.to_string(),
        }
    }
}

/// Returns the stock sample set: five developer-reference starters.
pub fn default_seed() -> Vec<SeedNote> {
    vec![
        SeedNote::new(
            "Python FastAPI Quick Start",
            "# FastAPI Quick Start Guide...",
            "python, fastapi, api, web development",
        ),
        SeedNote::new(
            "React Hooks Cheat Sheet",
            "# React Hooks Reference...",
            "javascript, react, hooks, frontend",
        ),
        SeedNote::new(
            "SQL Query Optimization",
            "# SQL Query Optimization Tips...",
            "sql, database, optimization, performance",
        ),
        SeedNote::new(
            "Git Best Practices",
            "# Git Workflow Guide...",
            "git, version control, workflow, best practices",
        ),
        SeedNote::new(
            "Docker Compose Setup",
            "# Docker Compose for Development...",
            "docker, devops, development, containers",
        ),
    ]
}
