use playlistmover::types::{Image, Playlist, Song};
use serde_json::json;

fn sample_playlist() -> Playlist {
    Playlist {
        title: "Afro beats".to_string(),
        songs: vec![Song {
            title: "Last Last".to_string(),
            artists: vec!["Burna Boy".to_string(), "Feature Act".to_string()],
            images: vec![Image {
                url: "https://img/a.jpg".to_string(),
                height: Some(300),
                width: Some(300),
            }],
        }],
        images: vec![Image {
            url: "https://img/cover.jpg".to_string(),
            height: None,
            width: None,
        }],
    }
}

#[test]
fn test_playlist_round_trip() {
    let playlist = sample_playlist();
    let value = serde_json::to_value(&playlist).unwrap();
    let decoded: Playlist = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, playlist);
}

#[test]
fn test_playlist_serialized_shape() {
    let value = serde_json::to_value(sample_playlist()).unwrap();
    assert_eq!(value["title"], "Afro beats");
    assert_eq!(value["songs"][0]["artists"][0], "Burna Boy");
    assert_eq!(value["songs"][0]["artists"][1], "Feature Act");
    assert_eq!(value["songs"][0]["images"][0]["url"], "https://img/a.jpg");
    assert_eq!(value["songs"][0]["images"][0]["height"], 300);
    assert_eq!(value["images"][0]["height"], json!(null));
}

#[test]
fn test_create_path_schema_accepts_valid_payload() {
    let payload = json!([
        {
            "title": "naija",
            "songs": [
                { "title": "Jailer", "artists": ["Asa"], "images": [] }
            ],
            "images": []
        }
    ]);
    let playlists: Vec<Playlist> = serde_json::from_value(payload).unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].songs[0].artists, vec!["Asa"]);
}

#[test]
fn test_create_path_schema_rejects_incomplete_songs() {
    // A song without its artists list fails the playlist schema.
    let payload = json!([
        {
            "title": "naija",
            "songs": [ { "title": "Jailer", "images": [] } ],
            "images": []
        }
    ]);
    assert!(serde_json::from_value::<Vec<Playlist>>(payload).is_err());
}

#[test]
fn test_create_path_schema_rejects_untitled_playlists() {
    let payload = json!([ { "songs": [], "images": [] } ]);
    assert!(serde_json::from_value::<Vec<Playlist>>(payload).is_err());
}
