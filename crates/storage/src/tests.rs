#[cfg(test)]
mod storage_tests {
    use crate::{RatingStore, Storage, StorageError};
    use songvote_core::{RatingRecord, Vote};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    fn vote(winner_id: i64, loser_id: i64) -> Vote {
        Vote {
            winner_id,
            winner_title: format!("Song {winner_id}"),
            winner_artist: format!("Artist {winner_id}"),
            loser_id,
            loser_title: format!("Song {loser_id}"),
            loser_artist: format!("Artist {loser_id}"),
        }
    }

    #[test]
    fn test_storage_new_is_empty() {
        let (storage, _temp_dir) = create_test_storage();
        assert_eq!(storage.count_ratings().unwrap(), 0);
        assert!(storage.get_rating(1).unwrap().is_none());
    }

    #[test]
    fn test_reopen_keeps_data() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("reopen.db");
        {
            let storage = Storage::new(&db_path).unwrap();
            storage.record_vote(&vote(1, 2)).unwrap();
        }
        let storage = Storage::new(&db_path).unwrap();
        assert_eq!(storage.count_ratings().unwrap(), 2);
    }

    #[test]
    fn test_upsert_and_get_rating() {
        let (storage, _temp_dir) = create_test_storage();
        let mut record = RatingRecord::new(42, "Yellow", "Coldplay");
        record.wins = 3;
        record.appearances = 4;
        storage.upsert_rating(&record).unwrap();
        assert_eq!(storage.get_rating(42).unwrap(), Some(record.clone()));

        record.appearances = 5;
        storage.upsert_rating(&record).unwrap();
        assert_eq!(storage.get_rating(42).unwrap().unwrap().appearances, 5);
    }

    #[test]
    fn test_upsert_rejects_wins_above_appearances() {
        let (storage, _temp_dir) = create_test_storage();
        let mut record = RatingRecord::new(1, "A", "B");
        record.wins = 2;
        record.appearances = 1;
        let err = storage.upsert_rating(&record).unwrap_err();
        assert!(matches!(err, StorageError::Database(_)));
        assert!(storage.get_rating(1).unwrap().is_none());
    }

    #[test]
    fn test_record_vote_creates_records_lazily() {
        let (storage, _temp_dir) = create_test_storage();
        let (winner, loser) = storage.record_vote(&vote(10, 20)).unwrap();

        assert_eq!((winner.id, winner.wins, winner.appearances), (10, 1, 1));
        assert_eq!((loser.id, loser.wins, loser.appearances), (20, 0, 1));
        assert_eq!(winner.title, "Song 10");
        assert_eq!(storage.get_rating(20).unwrap(), Some(loser));
    }

    #[test]
    fn test_record_vote_increments_exactly_once() {
        let (storage, _temp_dir) = create_test_storage();
        storage.record_vote(&vote(1, 2)).unwrap();
        let before_a = storage.get_rating(1).unwrap().unwrap();
        let before_b = storage.get_rating(2).unwrap().unwrap();

        let (a, b) = storage.record_vote(&vote(1, 2)).unwrap();
        assert_eq!(a.wins, before_a.wins + 1);
        assert_eq!(a.appearances, before_a.appearances + 1);
        assert_eq!(b.wins, before_b.wins);
        assert_eq!(b.appearances, before_b.appearances + 1);
    }

    #[test]
    fn test_repeated_wins_accumulate() {
        let (storage, _temp_dir) = create_test_storage();
        for _ in 0..25 {
            storage.record_vote(&vote(7, 3)).unwrap();
        }
        let a = storage.get_rating(7).unwrap().unwrap();
        let b = storage.get_rating(3).unwrap().unwrap();
        assert_eq!((a.wins, a.appearances), (25, 25));
        assert_eq!((b.wins, b.appearances), (0, 25));
        assert_eq!(a.approval(), 100);
        assert_eq!(b.approval(), 0);
    }

    #[test]
    fn test_metadata_kept_from_first_vote() {
        let (storage, _temp_dir) = create_test_storage();
        storage.record_vote(&vote(1, 2)).unwrap();
        let mut renamed = vote(1, 2);
        renamed.winner_title = "Renamed".to_owned();
        let (winner, _) = storage.record_vote(&renamed).unwrap();
        assert_eq!(winner.title, "Song 1");
    }

    #[test]
    fn test_failed_vote_leaves_no_partial_update() {
        let (storage, _temp_dir) = create_test_storage();
        storage.record_vote(&vote(1, 5)).unwrap();

        let conn = storage.pool.get().unwrap();
        conn.execute_batch(
            "CREATE TRIGGER fail_track_9 BEFORE INSERT ON songs WHEN NEW.id = 9
             BEGIN SELECT RAISE(ABORT, 'simulated storage failure'); END;",
        )
        .unwrap();
        drop(conn);

        // Track 1 sorts first and is written before the insert of 9 aborts.
        let err = storage.record_vote(&vote(1, 9)).unwrap_err();
        assert!(matches!(err, StorageError::Database(_)));

        let a = storage.get_rating(1).unwrap().unwrap();
        assert_eq!((a.wins, a.appearances), (1, 1));
        assert!(storage.get_rating(9).unwrap().is_none());
    }

    #[test]
    fn test_top_ratings_order() {
        let (storage, _temp_dir) = create_test_storage();
        // 1: 2/2 = 100, 2: 0/3 = 0, 3: 1/1 = 100, 4: 1/2 = 50
        storage.record_vote(&vote(1, 2)).unwrap();
        storage.record_vote(&vote(1, 2)).unwrap();
        storage.record_vote(&vote(3, 4)).unwrap();
        storage.record_vote(&vote(4, 2)).unwrap();

        let top = storage.top_ratings(10).unwrap();
        let ids: Vec<i64> = top.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2]);

        let top2 = storage.top_ratings(2).unwrap();
        assert_eq!(top2.len(), 2);
    }

    #[test]
    fn test_legacy_song_table_is_imported() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("legacy.db");
        {
            let conn = rusqlite::Connection::open(&db_path).unwrap();
            conn.execute_batch(
                "CREATE TABLE song (
                    id INTEGER PRIMARY KEY,
                    title VARCHAR(200) NOT NULL,
                    artist VARCHAR(200) NOT NULL,
                    wins INTEGER,
                    appearances INTEGER
                 );
                 INSERT INTO song VALUES (11, 'Old', 'Band', 3, 4);
                 INSERT INTO song VALUES (12, 'Fresh', 'Band', NULL, NULL);",
            )
            .unwrap();
        }

        let storage = Storage::new(&db_path).unwrap();
        let old = storage.get_rating(11).unwrap().unwrap();
        assert_eq!((old.wins, old.appearances, old.approval()), (3, 4, 75));
        let fresh = storage.get_rating(12).unwrap().unwrap();
        assert_eq!((fresh.wins, fresh.appearances), (0, 0));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_votes_have_no_lost_updates() {
        let (storage, _temp_dir) = create_test_storage();
        let store: Arc<dyn RatingStore> = Arc::new(storage);

        let mut handles = Vec::new();
        for _ in 0..100 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.record_vote(&vote(100, 200)).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let a = store.get_rating(100).await.unwrap().unwrap();
        let b = store.get_rating(200).await.unwrap().unwrap();
        assert_eq!((a.wins, a.appearances), (100, 100));
        assert_eq!((b.wins, b.appearances), (0, 100));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_opposite_votes_do_not_deadlock() {
        let (storage, _temp_dir) = create_test_storage();
        let store: Arc<dyn RatingStore> = Arc::new(storage);

        let mut handles = Vec::new();
        for i in 0..100 {
            let store = Arc::clone(&store);
            let v = if i % 2 == 0 { vote(1, 2) } else { vote(2, 1) };
            handles.push(tokio::spawn(async move { store.record_vote(&v).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let a = store.get_rating(1).await.unwrap().unwrap();
        let b = store.get_rating(2).await.unwrap().unwrap();
        assert_eq!((a.wins, a.appearances), (50, 100));
        assert_eq!((b.wins, b.appearances), (50, 100));
        assert_eq!(store.count_ratings().await.unwrap(), 2);
    }
}
