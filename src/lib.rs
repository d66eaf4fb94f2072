/*!
`rpsl-parser` is a library for parsing RPSL objects and WHOIS server responses.

RPSL ([RFC 2622](https://datatracker.ietf.org/doc/html/rfc2622)) is the text format used by
Internet Routing Registries (RIPE, ARIN, RADb, ...) to describe routing policy. An object is a
list of `name: value` attributes, values may span multiple lines, and objects are separated by
blank lines. WHOIS servers add response messages starting with `%`.

## Parsing a single object

```
use rpsl_parser::{object, parse_rpsl_object};

let role_acme = "
role:           ACME Company
address:        Packet Street 6
                128 Series of Tubes
                Internet
nic-hdl:        RPSL1-RIPE
source:         RIPE
";

let parsed = parse_rpsl_object(role_acme).unwrap();
assert_eq!(
    parsed,
    object! {
        "role": "ACME Company";
        "address": "Packet Street 6", "128 Series of Tubes", "Internet";
        "nic-hdl": "RPSL1-RIPE";
        "source": "RIPE";
    }
);
```

## Parsing a WHOIS server response

```
use rpsl_parser::parse_whois_server_response;

let response = "
% This is the RIPE Database query service.

aut-num:        AS3257
as-name:        GTT-BACKBONE

% This query was served by the RIPE Database Query Service version 1.106.1 (BUSA)
";

let objects = parse_whois_server_response(response).unwrap();
assert_eq!(objects.len(), 1);
assert_eq!(objects[0].class(), Some("aut-num"));
```

Use [RpslParser] to skip malformed objects instead of failing, or to validate objects
against RFC 2622.

## Features

- `serde`: derive `Serialize`/`Deserialize` for all models, [RpslObject::json](models::RpslObject::json)
- `cli`: build the `rpsl-parser` command line tool
*/

pub mod error;
pub mod models;
pub mod parser;

pub use error::ParserError;
pub use models::{RpslAttribute, RpslObject, WhoisResponse, WhoisResponseItem, WhoisServerMessage};
pub use parser::{
    parse_rpsl_object, parse_whois_response, parse_whois_server_response, ErrorPolicy,
    RpslParser,
};
