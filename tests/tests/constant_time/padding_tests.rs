// Valid and invalid padding must take the same time to reject or accept

use std::hint::black_box;

use blockflow_symmetric::streaming::padding::unpad;
use blockflow_symmetric::{fetch, CipherContext};

use super::{report, TestConfig, TimingTester};

fn block_with_pad(pad: u8) -> [u8; 16] {
    let mut block = [0x61u8; 16];
    let start = 16 - pad as usize;
    block[start..].fill(pad);
    block
}

#[test]
#[ignore = "timing-sensitive"]
fn test_unpad_valid_vs_early_mismatch() {
    let config = TestConfig::for_padding_check();
    let valid = block_with_pad(16);
    let mut invalid = valid;
    invalid[14] = 0; // mismatch right next to the length byte

    TimingTester::warm_up(
        config.num_warmup,
        || {
            let _ = black_box(unpad(black_box(&valid)));
        },
        || {
            let _ = black_box(unpad(black_box(&invalid)));
        },
    );

    let tester = TimingTester::from_config(&config);
    let t_valid = tester.measure(|| {
        let _ = black_box(unpad(black_box(&valid)));
    });
    let t_invalid = tester.measure(|| {
        let _ = black_box(unpad(black_box(&invalid)));
    });

    let analysis = tester.analyze(&t_valid, &t_invalid, &config).unwrap();
    report("unpad (valid vs mismatch)", &analysis, &config);
}

#[test]
#[ignore = "timing-sensitive"]
fn test_unpad_short_vs_long_pad() {
    let config = TestConfig::for_padding_check();
    let short = block_with_pad(1);
    let long = block_with_pad(16);

    let tester = TimingTester::from_config(&config);
    TimingTester::warm_up(
        config.num_warmup,
        || {
            let _ = black_box(unpad(black_box(&short)));
        },
        || {
            let _ = black_box(unpad(black_box(&long)));
        },
    );
    let t_short = tester.measure(|| {
        let _ = black_box(unpad(black_box(&short)));
    });
    let t_long = tester.measure(|| {
        let _ = black_box(unpad(black_box(&long)));
    });

    let analysis = tester.analyze(&t_short, &t_long, &config).unwrap();
    report("unpad (1 vs 16 pad bytes)", &analysis, &config);
}

fn decrypt_final(template: &CipherContext, ciphertext: &[u8]) {
    let mut ctx = template.dup();
    let mut out = Vec::with_capacity(32);
    let _ = ctx.update(ciphertext, &mut out);
    let _ = black_box(ctx.finalize(&mut out));
}

#[test]
#[ignore = "timing-sensitive"]
fn test_decrypt_final_good_vs_bad_padding() {
    let config = TestConfig::for_stream_final();
    let key = [0x13u8; 16];

    // Ciphertexts of a valid and an invalid final block
    let mut forge = fetch("AES-128-ECB").unwrap();
    forge.set_padding(false).unwrap();
    let mut encrypt = |block: &[u8; 16]| {
        forge.encrypt_init(Some(&key), None).unwrap();
        let mut ct = Vec::new();
        forge.update(block, &mut ct).unwrap();
        forge.finalize(&mut ct).unwrap();
        ct
    };
    let good = encrypt(&block_with_pad(4));
    let mut bad_block = block_with_pad(4);
    bad_block[15] = 0x20;
    let bad = encrypt(&bad_block);

    let mut template = fetch("AES-128-ECB").unwrap();
    template.decrypt_init(Some(&key), None).unwrap();

    TimingTester::warm_up(
        config.num_warmup,
        || decrypt_final(&template, &good),
        || decrypt_final(&template, &bad),
    );
    let tester = TimingTester::from_config(&config);
    let t_good = tester.measure(|| decrypt_final(&template, &good));
    let t_bad = tester.measure(|| decrypt_final(&template, &bad));

    let analysis = tester.analyze(&t_good, &t_bad, &config).unwrap();
    report("decrypt final (good vs bad padding)", &analysis, &config);
}
