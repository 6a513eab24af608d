pub mod account;
pub mod community;
pub mod list;
pub mod media;
pub mod notification;
pub mod timeline;
pub mod trend;
pub mod tweet;
pub mod user;

pub use account::{DmPolicy, FollowRequests, GroupDmPolicy, Privacy, Settings, Typeahead, UnreadCount};
pub use community::{Community, CommunityKind, CommunityRole, CommunityRule, UnavailableCommunity};
pub use list::{List, ListKind, UnavailableList};
pub use media::{MediaUpload, MediaUploadInit, ProcessingInfo};
pub use notification::{Notification, NotificationKind};
pub use timeline::{Cursor, CursorDirection, Cursors, DiscoverItem, Entry, EntryContent, SearchItem, Segment, Slice};
pub use trend::Trend;
pub use tweet::{Link, Media, MediaKind, Mention, ReplyTo, Tweet, TweetKind, TweetTombstone, VideoVariant};
pub use user::{SuspendedUser, UnavailableUser, User, UserKind};
