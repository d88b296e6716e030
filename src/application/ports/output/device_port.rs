/*
Device Parser Port

This port turns a raw user-agent string into browser and OS names for display
and for the notification tokens. Parsing is treated as a black box: the
default adapter is a pattern list, but a host may plug in any parser it
already ships.

The IP is not part of this contract — it comes from the originating request
for the current login, or from the stored session record when rendering the
session table.
*/

use crate::domain::entities::ParsedDevice;

pub trait DeviceParserPort: Send + Sync {
    fn parse(&self, user_agent: &str) -> ParsedDevice;
}
