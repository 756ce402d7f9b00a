use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::error::{ResolveError, Result};
use crate::media::StreamVariant;

// Attribute names are preceded by the tag colon, a comma, or whitespace.
static NAME_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)(?:^|[:,\s])NAME="([^"]*)""#).unwrap());
static VIDEO_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)(?:^|[:,\s])VIDEO="([^"]*)""#).unwrap());
// Whitespace-delimited tokens only, so quoted `URI="http..."` attributes are skipped.
static STREAM_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(?:^|\s)(https?://\S+)").unwrap());

/// Parses a variant playlist into `(quality, url)` pairs in document order.
///
/// Quality labels are taken from `NAME="..."` attributes, or from `VIDEO="..."`
/// when a playlist carries no `NAME` at all. Labels and absolute URLs are
/// extracted independently and paired positionally, so both counts must agree.
/// Any URL that fails to parse rejects the whole playlist.
pub fn parse_variants(raw: &str) -> Result<Vec<StreamVariant>> {
    let mut labels = capture_all(&NAME_ATTR, raw);
    if labels.is_empty() {
        labels = capture_all(&VIDEO_ATTR, raw);
    }
    if labels.is_empty() {
        return Err(ResolveError::NoStreamsForChannel {
            channel: String::new(),
        });
    }

    let urls = capture_all(&STREAM_URL, raw);
    if labels.len() != urls.len() {
        return Err(ResolveError::VariantCountMismatch {
            labels: labels.len(),
            urls: urls.len(),
        });
    }

    let variants = labels
        .into_iter()
        .zip(urls)
        .map(|(label, url)| {
            let parsed = Url::parse(url).map_err(|source| ResolveError::MalformedUrl {
                url: url.to_owned(),
                source,
            })?;
            Ok(StreamVariant {
                quality: normalize_label(label),
                url: parsed,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("parsed {} stream variants", variants.len());
    Ok(variants)
}

fn capture_all<'a>(re: &Regex, input: &'a str) -> Vec<&'a str> {
    re.captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    const LEGACY_PLAYLIST: &str = r#"#EXTM3U
#EXT-X-TWITCH-INFO:NODE="video-edge-c2a1b4.lax03",MANIFEST-NODE="video-weaver.lax03",SERVER-TIME="1452136233.52",USER-IP="203.0.113.7",CLUSTER="lax03",MANIFEST-CLUSTER="lax03"
#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="chunked",NAME="Source",AUTOSELECT=YES,DEFAULT=YES
#EXT-X-STREAM-INF:PROGRAM-ID=1,BANDWIDTH=3523000,RESOLUTION=1280x720,CODECS="avc1.4D401F,mp4a.40.2",VIDEO="chunked"
http://video-edge-c2a1b4.lax03.hls.ttvnw.net/hls-83d9c0/foo_1/chunked/index-live.m3u8?token=id=1,bid=2
#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="high",NAME="High",AUTOSELECT=YES,DEFAULT=YES
#EXT-X-STREAM-INF:PROGRAM-ID=1,BANDWIDTH=1760000,RESOLUTION=1280x720,CODECS="avc1.66.31,mp4a.40.2",VIDEO="high"
http://video-edge-c2a1b4.lax03.hls.ttvnw.net/hls-83d9c0/foo_1/high/index-live.m3u8?token=id=1,bid=2
#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="medium",NAME="Medium",AUTOSELECT=YES,DEFAULT=YES
#EXT-X-STREAM-INF:PROGRAM-ID=1,BANDWIDTH=928000,RESOLUTION=852x480,CODECS="avc1.66.30,mp4a.40.2",VIDEO="medium"
http://video-edge-c2a1b4.lax03.hls.ttvnw.net/hls-83d9c0/foo_1/medium/index-live.m3u8?token=id=1,bid=2
#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID="audio_only",NAME="Audio Only",AUTOSELECT=NO,DEFAULT=NO
#EXT-X-STREAM-INF:PROGRAM-ID=1,BANDWIDTH=128000,CODECS="mp4a.40.2",VIDEO="audio_only"
http://video-edge-c2a1b4.lax03.hls.ttvnw.net/hls-83d9c0/foo_1/audio_only/index-live.m3u8?token=id=1,bid=2
"#;

    #[test]
    fn parses_legacy_playlist_in_order() {
        let variants = parse_variants(LEGACY_PLAYLIST).unwrap();
        let qualities: Vec<&str> = variants.iter().map(|v| v.quality.as_str()).collect();
        assert_eq!(qualities, ["source", "high", "medium", "audio only"]);
        assert_eq!(
            variants[1].url.as_str(),
            "http://video-edge-c2a1b4.lax03.hls.ttvnw.net/hls-83d9c0/foo_1/high/index-live.m3u8?token=id=1,bid=2"
        );
    }

    #[test]
    fn parses_two_pair_playlist() {
        let raw = "#EXTM3U\n\
                   #EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID=\"720p\",NAME=\"720p\"\n\
                   #EXT-X-STREAM-INF:BANDWIDTH=1\n\
                   http://a/x.m3u8\n\
                   #EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID=\"chunked\",NAME=\"source\"\n\
                   #EXT-X-STREAM-INF:BANDWIDTH=2\n\
                   http://a/y.m3u8\n";
        let variants = parse_variants(raw).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].quality, "720p");
        assert_eq!(variants[0].url.as_str(), "http://a/x.m3u8");
        assert_eq!(variants[1].quality, "source");
        assert_eq!(variants[1].url.as_str(), "http://a/y.m3u8");
    }

    #[test]
    fn video_attribute_is_used_when_name_is_absent() {
        let raw = "#EXTM3U\n\
                   #EXT-X-STREAM-INF:BANDWIDTH=1,VIDEO=\"Source\"\n\
                   https://a/src.m3u8\n\
                   #EXT-X-STREAM-INF:BANDWIDTH=2,VIDEO=\"mobile\"\n\
                   https://a/mobile.m3u8\n";
        let variants = parse_variants(raw).unwrap();
        assert_eq!(variants[0].quality, "source");
        assert_eq!(variants[1].quality, "mobile");
        assert_eq!(variants[1].url.as_str(), "https://a/mobile.m3u8");
    }

    #[test]
    fn quoted_uri_attributes_are_not_stream_urls() {
        let raw = "#EXTM3U\n\
                   #EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID=\"aac\",NAME=\"audio only\",URI=\"https://a/audio.m3u8\"\n\
                   #EXT-X-STREAM-INF:BANDWIDTH=1\n\
                   https://a/audio-variant.m3u8\n";
        let variants = parse_variants(raw).unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].url.as_str(), "https://a/audio-variant.m3u8");
    }

    #[test]
    fn no_quality_markers_means_no_streams() {
        let raw = "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=1\nhttp://a/x.m3u8\n";
        let err = parse_variants(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoStreamsForChannel);

        let err = parse_variants("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoStreamsForChannel);
    }

    #[test]
    fn three_labels_two_urls_is_malformed() {
        let raw = "NAME=\"source\"\nhttp://a/1.m3u8\n\
                   NAME=\"high\"\nhttp://a/2.m3u8\n\
                   NAME=\"low\"\n";
        let err = parse_variants(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedManifest);
        assert!(matches!(
            err,
            ResolveError::VariantCountMismatch { labels: 3, urls: 2 }
        ));
    }

    #[test]
    fn one_bad_url_rejects_whole_playlist() {
        let raw = "NAME=\"source\"\nhttp://a/1.m3u8\n\
                   NAME=\"high\"\nhttp://[bad/2.m3u8\n";
        let err = parse_variants(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedManifest);
        assert!(matches!(err, ResolveError::MalformedUrl { .. }));
    }

    fn label() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Source".to_string()),
            Just("high".to_string()),
            Just("Medium".to_string()),
            Just("low".to_string()),
            Just("mobile".to_string()),
            Just("Audio Only".to_string()),
            "[a-z0-9]{1,8}",
        ]
    }

    fn playlist(pairs: &[(String, String)]) -> String {
        let mut raw = String::from("#EXTM3U\n");
        for (label, path) in pairs {
            raw.push_str(&format!(
                "#EXT-X-MEDIA:TYPE=VIDEO,GROUP-ID=\"g\",NAME=\"{label}\"\n\
                 #EXT-X-STREAM-INF:BANDWIDTH=1000\n\
                 https://edge.example.net/{path}/index.m3u8\n"
            ));
        }
        raw
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Parsing is deterministic and keeps one variant per pair, in order.
        #[test]
        fn prop_parse_is_idempotent(
            pairs in prop::collection::vec((label(), "[a-z]{1,6}"), 1..8),
        ) {
            let raw = playlist(&pairs);
            let first = parse_variants(&raw).unwrap();
            let second = parse_variants(&raw).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), pairs.len());
            for (variant, (label, _)) in first.iter().zip(&pairs) {
                prop_assert_eq!(&variant.quality, &label.to_lowercase());
            }
        }

        /// A label/url count mismatch never yields a partial list.
        #[test]
        fn prop_count_mismatch_is_malformed(
            labels in prop::collection::vec(label(), 1..8),
            url_count in 0usize..10,
        ) {
            prop_assume!(labels.len() != url_count);
            let mut raw = String::from("#EXTM3U\n");
            for label in &labels {
                raw.push_str(&format!("#EXT-X-MEDIA:TYPE=VIDEO,NAME=\"{label}\"\n"));
            }
            for i in 0..url_count {
                raw.push_str(&format!("https://edge.example.net/{i}.m3u8\n"));
            }
            let err = parse_variants(&raw).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::MalformedManifest);
        }
    }
}
