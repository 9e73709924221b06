//! Feed parsing: find the latest episode's enclosure URL.
//!
//! The whole document is first checked for well-formedness, then parsed as
//! RSS 2.0 and, if that fails, as Atom. Only the first item (or entry) is
//! considered, since feeds list the newest episode first.

use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, warn};

/// The first item of a feed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LatestEpisode {
    /// Item title, if the item has one
    pub title: Option<String>,

    /// Enclosure URL; empty when the feed has no item or the first item has
    /// no enclosure
    pub url: String,
}

impl LatestEpisode {
    /// Whether an enclosure URL was found
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Parse a feed and return its first item
///
/// A feed without items, or whose first item carries no enclosure, is not an
/// error: the returned [`LatestEpisode::url`] is empty.
///
/// # Errors
/// Returns [`Error::Parse`] if the content is neither RSS nor Atom, which
/// includes malformed XML.
pub fn parse_latest_episode(content: &str) -> Result<LatestEpisode> {
    check_well_formed(content)?;

    let episode = match parse_as_rss(content) {
        Ok(episode) => {
            debug!("Parsed feed as RSS");
            episode
        }
        Err(rss_err) => {
            debug!("Failed to parse as RSS: {}, trying Atom", rss_err);
            match parse_as_atom(content) {
                Ok(episode) => {
                    debug!("Parsed feed as Atom");
                    episode
                }
                Err(atom_err) => {
                    return Err(Error::Parse(format!(
                        "failed to parse feed as RSS or Atom. RSS error: {}. Atom error: {}",
                        rss_err, atom_err
                    )));
                }
            }
        }
    };

    if !episode.has_url() {
        warn!("Feed has no enclosure on its first item");
    }

    Ok(episode)
}

/// Parse a feed and return only the latest enclosure URL (empty if none)
pub fn latest_episode_url(content: &str) -> Result<String> {
    parse_latest_episode(content).map(|episode| episode.url)
}

/// Read the document to EOF so that anything after the root element is
/// checked too; the feed parsers stop at the closing root tag.
fn check_well_formed(content: &str) -> Result<()> {
    let mut reader = Reader::from_str(content);
    let mut depth: usize = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(end)) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    Error::Parse(format!(
                        "malformed XML: unexpected closing tag </{}> at position {}",
                        String::from_utf8_lossy(end.name().as_ref()),
                        reader.buffer_position()
                    ))
                })?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(Error::Parse(format!(
                    "malformed XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
    }

    if depth != 0 {
        return Err(Error::Parse(format!(
            "malformed XML: {depth} element(s) not closed at end of document"
        )));
    }

    Ok(())
}

fn parse_as_rss(content: &str) -> std::result::Result<LatestEpisode, rss::Error> {
    let channel = content.parse::<rss::Channel>()?;

    let episode = channel
        .items()
        .first()
        .map(|item| LatestEpisode {
            title: item.title().map(str::to_string),
            url: item
                .enclosure()
                .map(|enc| enc.url().to_string())
                .unwrap_or_default(),
        })
        .unwrap_or_default();

    Ok(episode)
}

fn parse_as_atom(content: &str) -> std::result::Result<LatestEpisode, atom_syndication::Error> {
    let feed = atom_syndication::Feed::read_from(content.as_bytes())?;

    let episode = feed
        .entries()
        .first()
        .map(|entry| LatestEpisode {
            title: Some(entry.title().as_str().to_string()).filter(|t| !t.is_empty()),
            url: entry
                .links()
                .iter()
                .find(|link| link.rel() == "enclosure")
                .map(|link| link.href().to_string())
                .unwrap_or_default(),
        })
        .unwrap_or_default();

    Ok(episode)
}
