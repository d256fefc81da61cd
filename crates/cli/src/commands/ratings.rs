use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use songvote_service::VoteService;
use songvote_storage::Storage;

use crate::{ensure_db_dir, get_db_path};

fn open_service() -> Result<VoteService> {
    let db_path = get_db_path()?;
    ensure_db_dir(&db_path)?;
    Ok(VoteService::new(Arc::new(Storage::new(&db_path)?)))
}

pub(crate) async fn run_rating(id: i64) -> Result<()> {
    let service = open_service()?;
    match service.get_rating(id).await? {
        Some(record) => {
            let approval = record.approval();
            let out = json!({
                "id": record.id,
                "title": record.title,
                "artist": record.artist,
                "wins": record.wins,
                "appearances": record.appearances,
                "approval": approval,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        },
        None => println!("No rating recorded for track {id}"),
    }
    Ok(())
}

pub(crate) async fn run_leaderboard(limit: usize) -> Result<()> {
    let service = open_service()?;
    let records = service.leaderboard(limit).await?;
    let rows: Vec<_> = records
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "title": r.title,
                "artist": r.artist,
                "wins": r.wins,
                "appearances": r.appearances,
                "approval": r.approval(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
