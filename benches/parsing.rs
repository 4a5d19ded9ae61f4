//! Benchmarks for line parsing, tag decoding, and dispatch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tmi_proto::tags::records::ChatMessageTags;
use tmi_proto::{Dispatcher, ParsedMessage};

/// Simple PING line
const SIMPLE_MESSAGE: &str = "PING :tmi.twitch.tv";

/// Untagged chat message
const PLAIN_PRIVMSG: &str =
    ":ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #somechannel :Hello, world!";

/// Fully tagged chat message
const TAGGED_PRIVMSG: &str = "@badges=moderator/1,subscriber/12;bits=100;color=#1E90FF;display-name=Ronni;emotes=25:0-4,12-16/1902:6-10;id=b34ccfc7;mod=1;room-id=1337;subscriber=1;tmi-sent-ts=1507246572675;turbo=0;user-id=87654321;user-type=mod :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #somechannel :Kappa Keepo Kappa";

/// Resub USERNOTICE with msg-param extensions
const USERNOTICE_RESUB: &str = "@badges=subscriber/6;color=#008000;display-name=Ronni;emotes=;id=db25007f;login=ronni;mod=0;msg-id=resub;msg-param-cumulative-months=6;msg-param-sub-plan=Prime;msg-param-sub-plan-name=Prime;room-id=1337;subscriber=1;system-msg=ronni\\shas\\ssubscribed\\sfor\\s6\\smonths!;tmi-sent-ts=1507246572675;turbo=1;user-id=87654321;user-type= :tmi.twitch.tv USERNOTICE #somechannel :Great stream! <3";

/// Chat-room NOTICE with secondary classification
const CHATROOM_NOTICE: &str =
    "@msg-id=already_banned :tmi.twitch.tv NOTICE #chatrooms:12345:abcde-uuid :somenick is already banned in this room.";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Parsing");

    group.bench_function("simple_ping", |b| {
        b.iter(|| black_box(ParsedMessage::parse(black_box(SIMPLE_MESSAGE))))
    });

    group.bench_function("plain_privmsg", |b| {
        b.iter(|| black_box(ParsedMessage::parse(black_box(PLAIN_PRIVMSG))))
    });

    group.bench_function("tagged_privmsg", |b| {
        b.iter(|| black_box(ParsedMessage::parse(black_box(TAGGED_PRIVMSG))))
    });

    group.finish();
}

fn benchmark_tag_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tag Decoding");
    let msg = ParsedMessage::parse(TAGGED_PRIVMSG);

    group.bench_function("chat_message_tags", |b| {
        b.iter(|| black_box(ChatMessageTags::from_tags(black_box(&msg.tags))))
    });

    group.finish();
}

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dispatch");
    let dispatcher = Dispatcher::new();

    for (name, line) in [
        ("tagged_privmsg", TAGGED_PRIVMSG),
        ("usernotice_resub", USERNOTICE_RESUB),
        ("chatroom_notice", CHATROOM_NOTICE),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let msg = ParsedMessage::parse(black_box(line));
                black_box(dispatcher.dispatch(&msg))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_tag_decoding,
    benchmark_dispatch
);
criterion_main!(benches);
