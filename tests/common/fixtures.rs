//! Feed fixtures

/// RSS 2.0 feed whose newest item encloses `url`
pub fn rss_feed(url: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Fixture Podcast</title>
    <link>https://example.com</link>
    <description>Fixture</description>
    <item>
      <title>Newest episode</title>
      <enclosure url="{url}" length="9" type="audio/mpeg"/>
    </item>
    <item>
      <title>Older episode</title>
      <enclosure url="https://example.com/older.mp3" length="9" type="audio/mpeg"/>
    </item>
  </channel>
</rss>"#
    )
}

/// RSS 2.0 feed with a channel but no items
pub const EMPTY_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Nothing yet</title>
    <link>https://example.com</link>
    <description>No episodes</description>
  </channel>
</rss>"#;

/// Episode payload served by the mock server
pub const EPISODE_BYTES: &[u8] = b"ID3\x04fake";
