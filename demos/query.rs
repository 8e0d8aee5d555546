use mdns_wire::dns_parser::{Class, Name, Question, Type};
use mdns_wire::{Inet, QueryConfig};

pub fn main() {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters("mdns_wire=debug");
    builder.init();

    let host = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "datamunch.local".to_owned());
    let questions = vec![Question {
        qname: Name::from_str(&host).unwrap(),
        prefer_unicast: false,
        qtype: Type::A,
        qclass: Class::IN,
    }];

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let responses = runtime
        .block_on(mdns_wire::query::<Inet>(&QueryConfig::from_env(), &questions))
        .unwrap();

    for response in &responses {
        let packet = response.packet().unwrap();
        for record in packet.answers.iter().chain(&packet.additional) {
            println!(
                "{} from {}: {} {} {} {}",
                record.name, response.from, record.ttl, record.cls, record.typ, record.data
            );
        }
    }
}
