//! Round constants and MDS matrix of the width-9 circomlib Poseidon over
//! the BN254 scalar field, as big-endian hex.

/// State width: eight inputs plus the capacity element.
pub const WIDTH: usize = 9;

pub const FULL_ROUNDS: usize = 8;

pub const PARTIAL_ROUNDS: usize = 63;

/// Parse 64 hex digits into little-endian limbs at compile time.
const fn limbs(hex: &str) -> [u64; 4] {
    let bytes = hex.as_bytes();
    assert!(bytes.len() == 64, "constant must have 64 hex digits");

    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 64 {
        let c = bytes[63 - i];
        let nibble = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => panic!("constant is not lowercase hex"),
        };
        limbs[i / 16] |= (nibble as u64) << (4 * (i % 16));
        i += 1;
    }
    limbs
}

/// `(FULL_ROUNDS + PARTIAL_ROUNDS) * WIDTH` constants, round by round.
pub const ROUND_CONSTANTS: [[u64; 4]; (FULL_ROUNDS + PARTIAL_ROUNDS) * WIDTH] = [
    limbs("2088ce9534577bf38be7bc457f2756d558d66e0c07b9cc001a580bd42cda0e77"),
    limbs("1b86e63908c4b12af43cec6810356c94d21c9e37d73dfff9742a58e0ec356be1"),
    limbs("09ca022ba1142d170f755212e2edc9d0a4ace33e16825f540d5d50d5a021a169"),
    limbs("277e69d47a133804241f6aebe9449be6e22c849c6d8ad8c938eaf613bc1aecd4"),
    limbs("17b57ea03754e24ae0ef425aa2ad931aac9ba5457a18cec594545a235db6b269"),
    limbs("11c740983395e0f4a026e2c7c939236375c9077755eb1a37a77d5a1fd74abac6"),
    limbs("1cd85529010dd7e2fb7ea403515bab5727556a479c59b822efc5a81eb37bc5bd"),
    limbs("2cb9354002cec4bcbfa985de34f43d702ced83d197aa374b5a1f96f87b12f292"),
    limbs("1f7af98e08f6877923f27a3dad40c525ac52f56fbbd878506544f9acd61aa32d"),
    limbs("2b15176925df33a45c9e99a7c4f26ad946b1075de58c7064c0ff92c431d31dd5"),
    limbs("22c89859b4d399d3a60a322d6b399b88061358493f3cb3653fda940e988c1ca3"),
    limbs("1a9f2730c80854d8f6dd98109363d405597039373af5055aa67fc18e5b1938fe"),
    limbs("040bae2c57fc68e3ce5e294998ea060e2563ebbac58ff8fc4a1a0a40575f0ed3"),
    limbs("16bf4f5622729467ee9749cc380605d2bc4d885cb99699aa2dd8565c4faf8b7e"),
    limbs("1045ecea044ba1cb1c3bf07ff4968390a3ea075001b21637ec7fcef61b11329a"),
    limbs("26a319fe6b7d6e08dd6cea9587cfe3f523492ece769f70f66d3b6197a262fd09"),
    limbs("28a5629b4c2083387eacb09c1571256d172ef1ed9c0738686da84216ba81bd6e"),
    limbs("186be22b6a063d18cc8760dba63b119cfc6d8897e32d6a0b19de280532fa9726"),
    limbs("2c41eaf9c0128c486c5595a1ced6b3dd15bd9b73218c6af88137cb8aa5c574e7"),
    limbs("11864265d76e8873b4d2ceccd18dada46ab7213321dbe0683727fa2df7e3cd7a"),
    limbs("1383e7371d7f3eb75f97461ff79565538166ede6fb6ac68b02cb60d8322467e4"),
    limbs("1a005346e9edc59573e3989f34c304ff1351de9642f398163602e138c59c7469"),
    limbs("2b541345bc4fe1589d649270ceed4b2dc6299c69a5d24b460e36f3b4eb486052"),
    limbs("213e74e3b88692068b420fdac7a62f3e90f87e8bd993310b982881b4ea7eb58d"),
    limbs("0254370fdf60e319df5d27b984e21d8979c86cc6c9db77b47e9e037d41ae2b84"),
    limbs("083b7377987bed3fbd0c5ee3279cccb319adaa660bb6a79ceee627f5a6369ecb"),
    limbs("0a2b26bbf2b84a55bc4c5b09b209d4a77bade4ecb0999e2a70021cccd4fbce1c"),
    limbs("287090d407c4c5293cd72bdd881ace1a4785c51889ac9ca053faef068533eb09"),
    limbs("00a9fcc21a234bc22a473c04931dde66476001ea6e32931277ca4cdab62a8587"),
    limbs("1d79fcc5066ff2a62d6ec0c096f3c0623f9722c5d10d6411386b8cf06606d116"),
    limbs("1d2da676081b7b0a7d87a57c6a6f2c91022a82291934ae8d646814f38b7c9cc3"),
    limbs("0121189d7362dba92f3bba28737ea247e85ff4b3ceabb4eadac26f7a79d371ad"),
    limbs("03ba01bdc7f31b4b3626831d5e82852a5da5a7f472f497564362ee63bd6d6102"),
    limbs("216487ac4eea81e4d835b220c7f1e7b7a3312df5ed0b6e606a169bdec89a35cb"),
    limbs("0eb5eb424bc72e5b20779d6138a7296dc333b4d98e4cede698c1d8f3069fc804"),
    limbs("1476087ee68863fe69d538de90f90bf271875fafec3aac6831fa17811afc45f6"),
    limbs("25995ecf079f4f81925ce8050e6bdd0b440e7adfb00da7e4dfd8a5aaec009f32"),
    limbs("01b590ea145df6152ff0e8eccb97f057eb378d3dc8585a8195a8fc6b03dddb21"),
    limbs("0ebfed12777ad9747734d82fb7ab59ebc85f07c3d055eb987dd42470e016bd52"),
    limbs("2e03b519ff070e31bad1ced25d02de18c5c073355890f26d6437c9990a3e232c"),
    limbs("028ed48befb70534a157c0bc8037347830ff6f7bffeda93a22663117c3038109"),
    limbs("21d5480ef2288cf37627083f5c6ff5806645d7878339792169d109945aa879cc"),
    limbs("2a017f4ca62717fe9d616fc3b74f426a22666a268eed190c92513679ff531866"),
    limbs("085cf123084d6b4b0b2b34cf06cf6f893e0a9db664958560e13102dca258a182"),
    limbs("01cab1eb61ae5a9c4f1b1f0f4cf71073d063cf8ea6ecb3a326bc3f2f24fc30ab"),
    limbs("08b659a737c0a7e198c51de07438e7faee94369715042367495f0305e89bb96f"),
    limbs("02b3adfef956007ba949e044a68115b0a9c895a81386e769744e7b5b2c307df6"),
    limbs("1a502a7b0883deaf9b24a7b451cf439d9b04c40af2fecc172b057b4fc00cafa6"),
    limbs("3048a536a2a75af41a0fa596752c83edb19c46c00e4072516a2cce33a42ce949"),
    limbs("01d008216832f77736b9f2c8eaf18d2ae69a7595a3d2e8725e75b3e9c66ab22c"),
    limbs("067389fa6719bb9e493424576d30d6254f1b7d54e69e1d1896c1b15ee85c0c20"),
    limbs("17da04cb5060861588a4dee60dacec407e08d6b19650359452705699bcdcabf4"),
    limbs("1e110b24526cf19448a04b71f91f834d903a08d3a7658e05ff0104ce6de14af0"),
    limbs("0b0a28b67269dcfb242231c7384d9b96c4406708f1a7bec26160e2352a820e34"),
    limbs("0226ba223bf5cc831bca604a2f55b324ad1d4b29b81ae33cbd7391ad0dca0c61"),
    limbs("1fa506fae71f617db6a04dba21eb6224accac5f7cff145947093bfce2f3f5cfc"),
    limbs("29724cc2973b5b34c4e53fb981f273589e7e0467a5b4b5a16d596f48844f0394"),
    limbs("20185815e6d5bd43d769b1e7b3a42369db44fada44534a9e41a181a7cd90cac4"),
    limbs("2cb5ecab94a2faf89986b565545493d5d8649d73a9f53133b614af6d89376612"),
    limbs("06772704a6a6c396f2f186272db825135c5986fbdbce0a3fd879bc27ee2134bf"),
    limbs("0112bff4736679a477440e744d7fc6191e168efe6c37fd0beeb6e64d30591851"),
    limbs("2faacc248d2f742b7dc50b013be9c4b2ea8d00be172832ad07ac0e268e391a57"),
    limbs("115ea053915c9231d6b9a71b4f3437e76d08af6e8fe7e42a3800136498df40aa"),
    limbs("0353e2c2845c0fdfc53f58394e2dbaca06164d10dbaf756127621b5a22181235"),
    limbs("29b3685900bbaca910363ae0cdec5f61cae2c52c7ede3ec010e2afeac748710e"),
    limbs("1a73ba985b824209d0a9f310920791fad9227b21bfd8e8a3a9f1c2fa89fac1a4"),
    limbs("274682d63a1d6a9eb5ea22e0558b145f5b9b5e845c8c9dceb83be943309a305f"),
    limbs("249de663dfdf6682ddc122e02aac0d79398f38e6089d92e2c892ccf949fcafcd"),
    limbs("076346a494ca499918229d2faf87b6b5afd4992f0d7d4023cbb677ea4376d4e2"),
    limbs("0712154eb43b0a3e8bdd94e29ad85939e220daf6931b84464741e64e9926b50e"),
    limbs("15bb7e127b9fc937642692a92d864960e249ddf327fc6c92afdedd89befc6c32"),
    limbs("0d438d885c3fce5b06a80584015eaf7a8ae05c60052c10ab80d80076800d8e11"),
    limbs("2bffb873c9b04762b2e362d6195c8013dcf7a5fd881894b7dc383c8aa34a9e0c"),
    limbs("24ea42c76f7350d08e8b1016663fdaa3f8552b9564e5ba2da45b76652707d6c0"),
    limbs("2a62ea21a0ade4740b808b9d838b4ef205b1193b579ecece0da34523c481dfbc"),
    limbs("0c49774a68f5274b468cea0f32211cc9a8ca864c6d32f2c644b1ab89edf475e9"),
    limbs("0a9b4d3d32564d83c24d4e052dc3072cffd61cbffaec957151fead13246073cc"),
    limbs("221179d848ae3c29baa0de8e19ad399cf000dcfce572ac310fc64bd4d201c3a1"),
    limbs("1702294352579a43d19da15dee1fdcb2a70a45de25203435e2340692f7f5e0a0"),
    limbs("059ab788273600685cf6de04f87ca9dbbceb1aefe37f779663a7ef5019d4d8e0"),
    limbs("23af64b1622be07735af1999691398ad6a034029a109ce435f12c1b21b41f599"),
    limbs("109ed21e2456ad7f94a0c6ca6ed942ef5e8132433e5fba6ed8f49b2038594516"),
    limbs("26d9ccfa5379d3fd6927a58958338d6037872271d891f19f67f70c39e0893326"),
    limbs("24ea9e2db358c1becf7dcd7d0e46979a647207816ae5a901fb00a6ccd991d0fe"),
    limbs("0015a9b8c33fce93ae3971d193a430be98eeca1d27735974cf502bfb20c71bbc"),
    limbs("2bbb366f79bc3baa138d79a96ab5cd14826bd3a85347e559550bf351f296dc1c"),
    limbs("0a1c76641eded157eaa1bf4aadc956791d9e7b29eb14d07654af052686b70e29"),
    limbs("0a8a9f9ee8ecf8ad0b5cd84217af26fdce2ca16c07bc747d103abcb48ab21fc2"),
    limbs("26d6852b5917f4e229c46824d00b44442b77d8e566fe3b3901ba6de2011dead6"),
    limbs("19601734c30cb2a44ee4a323b35f2c171ed67e0f3c1fcec7096e5f01fbae6885"),
    limbs("07895f7f029f84c3f17e359b0ee926d402505587f386cbb71070bc17cc87d044"),
    limbs("05807e0a2b2473f3b87130586c7868228eb4d9503bf25cc2b0f35a939e0ef483"),
    limbs("1ac9ba8eb9e2fde0a79886aa8c7dbd362aa490a355e07982828be3e5099d2fde"),
    limbs("231c7595f76fea5828672afc5bbb6463cd00e7a07346e2588af5638e3b321b40"),
    limbs("2e3d1677310217ce5fcc58f4039532ff946e2eff2b80d17f581ca78f0068672d"),
    limbs("0974163441712975a33b4093f922d7df17b2bdce7b7eb02c7830c5980464000e"),
    limbs("1cf5c1a4280822a59deecb82a64baab4edb87977e98ee29139bb51671b9919b2"),
    limbs("11ad46e13792150cf57933aa9476ec9184bfd5f23de46f1df78ed7e94cc81289"),
    limbs("0828fbfc0951c1ea0c0f3d5af2fe5796ed792a9c3cc4002b41e7a1bb8e63dae7"),
    limbs("02c720a8486e7122305304ecf3a00f99854535c4ff404fe82e30e99e8500fcf6"),
    limbs("09bdfc942fba8824c0a38d6f525f9176360d2881aa425028f1cd3a7fc3ef72c2"),
    limbs("1d954a0f93250e5581c6b897fbd72f4f2a943dde51e262e7dcc4a1b2ca82e2bb"),
    limbs("2b829352e297ab2106e74f9fe702f69635edf37e7ab0e1a7f92f14c98aed56eb"),
    limbs("12d3b917e58f1f44e1babaa341d1dac923dfac75482e108af1c33368734a904e"),
    limbs("28a9e6c65d06ed6ea47795bde9b177b5509305f85326062ad5015077afe4bbfb"),
    limbs("2bd3c33ae311c2f8d4ad82508b76df890c311fc8d232fbc2dc535fa593221ca8"),
    limbs("272d00d7a8fb1463bb624f1dd774edc8f3a0923bf9059bae3d84da23767d6873"),
    limbs("1355a796abdfaa903b81dfae32101a13068f5070440552eee0acf2a4d07d03bd"),
    limbs("0734bcbce4180ae16d4a6689b9b94f2b02cc7d74ca8ef1592cd16afe2a033728"),
    limbs("0778d4a614c2f76e28199d989a9052e2627464b620d91e7b6d3d15dbd4799d54"),
    limbs("16bbc980a67b2a65434d087c501859d127db377ae144ff634cb8574fe8bf869c"),
    limbs("12a3e7e197b0504c6894366245bed65e326db7c7aaf2c1c0d59e4bac10d633cf"),
    limbs("1f35f8c4431fb0dbf42d9d07334fd67f99160fa9f7e20d811f4b8fea7dd5d33f"),
    limbs("25d5bf1a863a0a6441cf55e7c85b8f232ff1556e77fbcc6d71e8bdf349bfdfbc"),
    limbs("15e6b8d9ab7e063a3638216ae471176e87ee4ce30cc24cad19587a23332320aa"),
    limbs("01929ef47c7322b77ebd0d1a40f9ec4d41eb2641bfba35a9cba7b708a534c9ca"),
    limbs("184f51e791edaa2dea7911151247bad4b0e864d7a8f678c7708ac65c51e3bb79"),
    limbs("2605adf5562d5055ffb284df1ec0d4e371eee0595ce1422ac535a410597cd866"),
    limbs("06e6d41feb832c2fe007e1bccc81442585bc9eae1612b8bc3d2a4925c239ad51"),
    limbs("137eb7da068955cde28db6ae5e780b7ae1c0d633cdd113bf0fde4345ac9c954d"),
    limbs("2e97930eb419f7353ba27b25879753fe64d7d187023ce2de4bf9e70eba6e9bb6"),
    limbs("13af409362087866e62d6860fdab159207405bf9c75a9efd9321736a1d812413"),
    limbs("0fd2f95404a9e92f46d57c80507375724966264560ebafb3ff2fd19259d47d62"),
    limbs("0bdd93ac21aedf31826fc3012fc8fff14384add521d98135df3ce70e47d38116"),
    limbs("083ea678d5a53e8a9b601906befbef23811a6137788bb873fefd5521f7d99f03"),
    limbs("08a9906be6e9ab93cbf1b94f090df2d02df6c6ccff6364c2ed6986d61f16af29"),
    limbs("187b1c82cfaf880449337cfa77f618e3ed19c604e65fb768b0333d8d535eaa47"),
    limbs("245005f814e38250751143117f5e27d5c173f0ca4ea2a81b1b8f3e90d7fec4f3"),
    limbs("25aa5a53ec5e71f3f47fb1cf8ea8c757fab69a61274fb36eada71deaf1614db2"),
    limbs("01c244a2ed1922753b39ec6b775f07cad91b14cd9b6578b64492c2cc4b0c8bb9"),
    limbs("01664e5c861216c4cb10cf3a3bd51afa0f3e59eae24fcd7e7daaa853d46c382e"),
    limbs("2af001a296c111e41e327ad212ed30234da2beada0449ea1d2e0f0a00e424074"),
    limbs("16022bdd67d2ade15f661a287dfe23915433b270f28c24e6066e45039aed813b"),
    limbs("132d7ca5f935f3e8864268ad723e8780df36916384a54b812c74a749a26826f6"),
    limbs("20bdab9829e48c89a99d0e8b0d69b79a4a273808807ade4ec5db95fd184c4f37"),
    limbs("28db494350ae9c81ab52d719ea05f98dc2afe87bc1afe556161e61772258a951"),
    limbs("19fc92f1d2c1dc043af3427b77ea74e80ab9f6041e0e51d1b24d9cb9f3fb3ed0"),
    limbs("16bea7126b8f072ab6c86afca80b606cb90c7e5fd02bbdba1dd733c3cb884705"),
    limbs("1fc57b168a5badca15a417ebb4bf5beb28fd09e0dff889550a126f5833f1fd5d"),
    limbs("1ad20d1a3ee559b6334be4ba911dec957d56699cf37dd7b97d23dcbc65bd9afd"),
    limbs("2173430a6842061f027393a443b6e25e59a3e5bcd20895ade0fcd7bebcd88885"),
    limbs("11673173043e15137361db05a0b067147a23d7f3003680f3e1534b183fe27cd8"),
    limbs("037c80af5ed51c1c22181f3e7738806984493eb998add05556eff65129259ff2"),
    limbs("1d70b961246d2262cacd8c0954040548b63fbd25f3038285c36f6b44e9b9ff5f"),
    limbs("2184448a7bb80d176dbe3de73f383a909635e4610c25864b2c63252186b6c44b"),
    limbs("03bdca6b22fb80cf9e7b317190ebbb9f6c7d3c96c1bf7d5013f36521a5dba7d0"),
    limbs("2b65873313d5bffa44d510dcb3f55048436f4eea91a100ec0d1af952eb64b247"),
    limbs("2a7fd02ef10db1c9dc03c9cbe82e857cf06f37ea10e7e3f539b53778ca274616"),
    limbs("1cb880cea192153865713565ee4255ce72da23b3d2142d265fbc2196fb8b569f"),
    limbs("16628b6f83fc36bbc1d60029a69c843d27484f594a7e3ba8d47cdfa548a91a56"),
    limbs("26fa9b84e855f1069e76e037104f8886b760d4919bed798e2e4b8dbe0080f16e"),
    limbs("0ee86c87bdf0ecd526e36a6c4ac9fc9bf05b9161856d658c1b9ecd80da9e9687"),
    limbs("08a5179993a8056405527cb82b6f619984c63cd115ffed3a6734ffa85267191f"),
    limbs("047aa61e4bf0721ac4e0a2f291e62124bcc2ad3949dcf96e875f45df7eeb5437"),
    limbs("263a511f033e1fbdc6d282b52712a09bf5d1fec21ea8bbfe2eb1ef5bc4f21148"),
    limbs("226520bf730486e2d8c859b449bbda7631b86432a2c100dd7386c9b1f993f34e"),
    limbs("2baef27107a52854788f0c5a940f5a4df0d18d38b893cbb1157b386a7d356357"),
    limbs("18022cca17f26818d54e60e300b5c949d9c92122f7de5651a60cf70c8da5fc52"),
    limbs("07baad301d58460d1e6ed10f52abf1bd785caef8565777fed94dd67de6717d25"),
    limbs("1e476106c4bce3903a5aac6e110df2cc1a7f71b4135be3662f4b01047e248a6a"),
    limbs("1e019dea5028d23b2df063c210466a88c3fc1ebdedccb8045c7e9d1bb6e77a98"),
    limbs("0dd55f006559bb6747b254d29a73f5ea7174c6b6067e730a5f9a9908186308e2"),
    limbs("0993085a8024a598e0c9059d3b919fb2ebc81be408cb96fe38a48a952c029189"),
    limbs("143f3cbf98e40971b2115493ee06e26c7893787bfcfb13b39f165869ec7fb9b7"),
    limbs("0525ff28fa24291b8d033b021395754fa030d497312cc17caafd008524eda07d"),
    limbs("2d9fdc18cd2586b9f449142017909392025095182d5f40d5911f708eb05cd852"),
    limbs("230997202fcd6f051e1bf1e59a9d01188e3621d613fe0e78e6dfb400efb43f45"),
    limbs("044b56469ffbbc9d0c0f075e20f390d30d11981a767e507b80aef7ed69e7171f"),
    limbs("1507d88bbe10b21c23a94555d1e4d379aa71672e002450393eaf7a23736150b7"),
    limbs("104d6752a761b50026377ec798404f71151b3cf6a9ea1be93c6840594824e9b6"),
    limbs("25276305cdeae4c16558de60da72941446a9fd2226aa604d44bbff12b1e0ec23"),
    limbs("10f3cefb054d630bd7dc4c7cabd97940dca683dad8cc35a6d0c30cbd9812051c"),
    limbs("0e406cbfa384c6b24ed043ff3cb1d6891baff0585afc4fcecc7cccec809df03d"),
    limbs("18f36033fcf64f1bda0c12616b00b611863efdb8966db7ed3534cfda40aeaf0d"),
    limbs("165d022a34cf10ad3255723635a51a35ba2a6db07572dba106dc56ca6c937c52"),
    limbs("223c8c9aed305b3d18265b56ecb7a4cfc4b10e58baa1365827a539c47819424f"),
    limbs("2103fee94674840b1aa185a1f8221ee4511a2b5268f1ac96d7b28c8984fde6d6"),
    limbs("1c1396433bb9eac9a02abf2390973c1723ec5cd55297a387a92806f78ef9d384"),
    limbs("1befee24005a88d2c9ae9226169e898106996fd32fecb72b0cb4decf109f1b92"),
    limbs("1adc49f1f1b405df727a64e98675ea0ac2fc742c806f0d5950c8ac41350f5184"),
    limbs("10a0e0cab76db0b6a00799dab1f2e4a74ef739173cfaab2d03eae240c9c847cb"),
    limbs("1a9aff62d6c66fdfed0eb91b6c4f974c1e047c0b27ef49b10d2933af1af3f997"),
    limbs("261967f6840995daf7411034526eb5ac725f95e21fc36c8ed191873985f95cb4"),
    limbs("1338030f85fcd2fae09eb016f4254086e1af2f88fe7dbe29d183c89ed5286098"),
    limbs("02c53745d1f0e66499ff109e777727e750c1134914cbb4d52bdf1649c7911ada"),
    limbs("2740100354406de4d94eb857a1c5df1c0e88d8b0b82d10c1276ea7d9f62a05d0"),
    limbs("0b8a9153d3d643f0a9f7dc08f24d70863e4f150d1c32ac8905a6226887c9bcef"),
    limbs("25dd73d81ea8918c9c1ff69b0b86a0ed3801ed1aa4059d94eb72cf548b2eea1d"),
    limbs("253d813cf05f2ff1c7d6622bdb9faaff277b4d0312a5888a9dcd12891ad1526f"),
    limbs("2523322d2d2a78cc54c944b57752bdd8d2c8e62e3af51e020eb2c15ed830f5f6"),
    limbs("2ac9c2d60d456848e8dfd47499cdbd4f2377f3b4ac98e10e2ae3e4f83b0071b4"),
    limbs("2a4e35f1df833442f9ccb8c75523b1ac8a9716174f47fb0830d94f9bc4386bcf"),
    limbs("270e7f6b15f2c0e0926147cbf79a7330b676d174acb65b730522dccb096f9fdb"),
    limbs("1933ef75d4b862f2274634e1f5a4e50ce899f15214f0b8feaebb2ca2ef52ced2"),
    limbs("165130ddf77a82db84278a31841109da4108d364bbdc6acbb1b0fa7aa5175dc5"),
    limbs("2fc1fe031dcd4538d5d8b1340d0d37df5505e965b7e7dc4c19895b9f6fceda6c"),
    limbs("0e1ead2be6f64559d903eaeb6e02a7c85d546422e7730e360a1e4bcc0f62f16f"),
    limbs("0a983360bf32392d5df30a2e4b22535a4f161fda3d05b1a5067d278e21c8e54c"),
    limbs("2e27e61828693607c17eff9bb1e5ed0baeef782e879c5230b86d6a79d729f4ce"),
    limbs("0d1cea26a08207e522ace505e837caa2ce7b105cbd04e7c838c1acd006ffa53f"),
    limbs("0b958dabc9a8066de9e4cef89abc82e3396a03568376fb44ccde4c38cb2a1944"),
    limbs("16f5b42d88f8d4f787ffff796bcf8175b1cdce307261dec86cf2034a9b88bbe8"),
    limbs("12b68aec2db262e0a61f0fd4b976b00ddbcf7546ef27f47d7435a288c2b6c63a"),
    limbs("1d2238d8d9768dc639d06ca5870e3503f3f81ef863300944c87b77628ab6d84d"),
    limbs("0d164e32fca3c3c8da3ae332a831cc9a95e75d4833ae232ae382bdc6b790d91a"),
    limbs("02fcdde6d6eabd7f2fa19234fb157661b762a5c47b57739a62000d7f6ca8ef3b"),
    limbs("0f133b8b1e54f43484574647812ca377c802a1590df5e5b8f9c8c21908efbe37"),
    limbs("03057ea8932e9bf7d1a4bad8241e14f1e60afd13ba4e90afb472d9dd29c42bde"),
    limbs("23dbcb6ecb4807740debdc825f7764571bc93f33645825d0e45c88b0088a9f18"),
    limbs("01b90754a2058217cdb64ab45e24c2e29423bc3a76f8289579927ecdf63edac9"),
    limbs("28db800ae16d7033c8e107e198aeaabbf9d0271c74d957c6bb9514a0f038fa91"),
    limbs("02f97a36ef93a7904cbdbdc36e5ef374e58eaf37b5b9439473cbe477c3fab178"),
    limbs("1bad1d9637a6ad6db5cbd19ba7b955a45b9e8089d1697445a130743e03ed3caf"),
    limbs("2b96f520dda8251a878b28bf96d281855b9c43220b0a3279179753f740edae80"),
    limbs("041f97f76c60b28e0fdf7974bf922b7a0999e0e0e40c654378ae12843212909d"),
    limbs("13b5cf57475057a2f5fb6d08093123973aef9726cbd9835b95616c2aed5588e0"),
    limbs("2ca43aed5aea162e8c9be92a15e7ad0af84d44f3d2e398b5f7491fa2df12deee"),
    limbs("089f6b1ec8b51cd1e6ea69b9649520a6f0f2f96ea11df270ab0c5d9adb5c3df0"),
    limbs("04f510cfc7e528370babb8ed7c50c34c6041772627793a0f3711d1300b4d1275"),
    limbs("260e12c47d0ab52563affcdd5c2862f4bad5b7af4ee037ea5f8164d0f13d1059"),
    limbs("1a656424760e75468aedd8515b3111e16cc0d60f8dce451f7bb35b12dec772b7"),
    limbs("00cc850e959c567bed20058b6769fc27a6c70cf72f222b80879e9bdfbc6711a9"),
    limbs("088947910eb3b43ebd8688695c64ac020e19d0bbe875a7f3a0b699bc60f18cac"),
    limbs("2c25c236bb48035f45fde5b178105655ace9f3f9afb09071e790dc4babdc86be"),
    limbs("12dfe1bc28654f5c9ba65865769c9e47f2bde0d79ddbdda21704904b2905da68"),
    limbs("05645b68f99a564ff08f745e1413bd83ab5b0442f0b8efaa2a986a6cfb2fd8fb"),
    limbs("17cf3ec9831b4d6ead640d912e41b4c72e9c259126bf6310fa4b110e43864c75"),
    limbs("12b15f28fefe5d6fa519ab9cc67a78c57dd721ab44af286e72fbbd5689a66f61"),
    limbs("2da44f7210520779cbdacfaab2e1ef01edda8eedb6fe6d037ffaf8e59842a00b"),
    limbs("137ff7323fe757f32afa165f11588b403bd393d5c9a961cd2f7da2e5d9a894cc"),
    limbs("1318105fa9fe1549f04ef48679c73d46b91ee0bf27b4451195de945c8cf78aff"),
    limbs("1408a4259df52a491775936b2c2d476a121708c312e635ef8d1f843c3ba3438d"),
    limbs("10cf20dd5734c18880dec5be44ae2ddcc4f447f20cac98c95193eb7571585d07"),
    limbs("2787fe4623bd3264e0c8b5a471974ac1feb1e37fbc3a9c8a4ea74d6010b7d08e"),
    limbs("1b90e21074907545c1dec3c59dbf2a6b1f703258bc03707e33db582d45ab172e"),
    limbs("0b8e912a5ec5a0bfb779a0801b90863edfd9429a7b3632bb5022fdbc40636cfb"),
    limbs("0d9982378cd9a8370bb7a555c34df3183ee6b0d8abf31f1f547a3993044188db"),
    limbs("1e497bcfd5c95cdfd630b0afbf6d376f29a468d1cd3ecde56f6940221d248af4"),
    limbs("2d602401cabbc69dff3dd552e271eec29a5a4acbc935686ccff9a15076585b7a"),
    limbs("170a5f4518f58544330671ad2a361f2c803c0d355f3e10a5784951f2abefa707"),
    limbs("21b3a23c3a553d401c08502eca497be938776af671edfe44c784956acf98865e"),
    limbs("224dd497bf3a4247b9c48c9ac3cee5307490e824a14204ed88c2b1166e8e479a"),
    limbs("2654965a3bf3c92422fb54e676ac8401baaf0f68d42664e300624a375302e0ef"),
    limbs("1d525f4105f51b69c006828670e7785b726e95be160ee1a3e299677820839f32"),
    limbs("28f88d089f421ca2bfe697270fc0f34f50ec41a1ede53612c52db74479b4b323"),
    limbs("082e621153ee34324e9fb7ff3d123fc9560ef9af0fa0f948db24d1c8e6f07a9c"),
    limbs("07f8578337523867b1d9403e9ca61ad99c0d7d5bcde4f19d8752e12a4d5805f7"),
    limbs("2e52f30dd05931adb7d7e85255849b062ba1cf2eb8d59208b5bda8e35d69819a"),
    limbs("14cb3e56b2b8c6605ba04261a8b117791caf26f7c233bb183f83f72ef4c8f345"),
    limbs("2fd6b4e6c892609fda21414dd8712de845eab305be627df4d36c8d325c9bd7ac"),
    limbs("0325898c8434f7ca32ebd73f53df3b1adb0c9940a69e9191fd996a4a96157bf8"),
    limbs("08f50a7b584dc022b85d6a16a0d3dff6b8a7ec4dcf5ec066f99fc4644d6d5d48"),
    limbs("29c5bbb8eb214fb285ca30a43cfd7141d9ceb8a19ff3c970f2bbf4c9bae9e11f"),
    limbs("1264cbd9ec001175211e2856a78901e4088f1eb7eaf5934999e1997307e7432c"),
    limbs("28a0e7819aa0251e9cf2bdabf64fadbd51dc9416533ae33f7cb97fd177688504"),
    limbs("1a9be651c412fee6c800848477cbb67e4c52fc23e51ade9c48f6af307ec621d6"),
    limbs("1bf70a24fe7fc8946fdde6f556b3ed4b03c33005cbe7f34ac11296e5b0c75f6d"),
    limbs("2f56c8c0387e5e44cf4921abd33b1590cad0719e932a36195c5138e0c6ac83c2"),
    limbs("1109db87b7684f4927b2afeeff00608af5f211920eb8d638e3a7c943b293fede"),
    limbs("1851c29804025b6f9c69c80891035590a51d13032cd576d332ca89222bc75787"),
    limbs("0909e4cdc0bc47f2df4898106b5c40f25c7137e1d5ac9a986c9f66fd5dfadfba"),
    limbs("2ae3e90e2650e286d5913d4dd1e71d4f233659701b319aa228e16af9f010e07e"),
    limbs("06a6c015f95173441f7a40d4f1bde04eb60fbc4dc72fdab7dd81ec557235d530"),
    limbs("2f6ab5d35ccfe9ea366da257c8596fa6ff30d6c46816a3bd3d484c97f8d2446c"),
    limbs("01f9c60308182eb6d4a83f9272bc220a8745d9c9127050899bf6426f7ab57cdd"),
    limbs("2f514c412bfd9754e6798e4c3cb13d5e4c4b29609d3ea5617ded35bc01d799d8"),
    limbs("14c4162b9c9eefb97941b1f133bb18225d28294d092cb8917afcb3e08abcd9cc"),
    limbs("19921fd625c66ec67ecd8af3d6ff0e0a3cb650e1e72b3fc98884b00354085b32"),
    limbs("1c852aefc9296753e1268739ac15d2c6d21de3436c816f75f93b8debf37eb6ca"),
    limbs("04bf4a69b1aa4f304afaa1dd1bf60de1f559e8167edddac1eb88ad9d02745fb8"),
    limbs("240a791f3b8bb62d5d9aae80f341cb569fe3fe72e7183d8e5830165e4d123753"),
    limbs("151b295b4242e0c09fef7bc5ef40f1e3c8551654186d62cc663ee4f28ff5e764"),
    limbs("086eb3d30bc4d80664a074a09739dc8c497c93cf7e657954b0cbf7676165f23d"),
    limbs("17aa8992d7b901eade7eacd95a8e89382a292a7121ab0ebbebe0dd62622c21c4"),
    limbs("1a5b3345a4c0d875663657607b5c7ff832f489b23a3c43962008570f96eb8de8"),
    limbs("2f03b46d9eeedcd7f8f4cf2cf710e48ce3f31d1364f03345b2a7964b01e6347c"),
    limbs("0fef583e7e8e102feba879f7bd60241870a0291723aa354a35259e0a40050d45"),
    limbs("2e07b5d70ca583cf4d9baffacd02d7d80fa5e523abbd895086a36288b969fa6a"),
    limbs("24599dbfa1dd1f4714d585248cf23ca1394b858af8e904c0517baedbf2f176df"),
    limbs("00a826afd370bcb65b66189e8d986777e61377388d8727e407b500fb5291f8ee"),
    limbs("28745950870bc1848adbc5f4bc03415f0a2bf23e905e7d33cad03de907081e3b"),
    limbs("219e6dcda590fc88d405673d2cb4710f8b5747b46dd9914d1be4081714cace58"),
    limbs("296692077b42e972399f17ba71ffededd95185ff7253d9d1f41747c6f27dbe6a"),
    limbs("2ccc5f0e2049d426841862f32f8062829fb5d826a6a483dd5078de859f9cbceb"),
    limbs("04f915a4fabc8ab208a615dd89fa207d367700bbb9bc061d07fa90a70feffda2"),
    limbs("2e04b7c1aa853f9ee5e4fbb5cd7b6e60ccea4ed5928a34f4e59ea9eba8794708"),
    limbs("08700df51138b36c0ef2bed12bd78340ec69b04a2e1b865108036391b4b6db3a"),
    limbs("2503336398f165bdea8d4929db1dd0b3710416fd63d7aadcec41bb7062c24782"),
    limbs("05633785a50a9c77573ab10d893341a0cc2df072ed8eab9a2996a47a527bdaed"),
    limbs("0ba4084e44c50e1412a4c982dc0d8a0d4622513b7c96e9fccb2c3be2d3901e1c"),
    limbs("2d6f32cb761406dfa9e03d7ff8a43bae106dc4519c61c3996cc9cccd8f307c86"),
    limbs("2f959c830737e631395846373b1f7d003c8e6bae3aea2edb73491244f8373687"),
    limbs("14863af59792adb1bb40901664349217498d999250cc0a858db27aed54fbaa38"),
    limbs("27623d101b1f922899f9c5783e1fdbb1e7552826e4d6b58d6df8d986937cdc82"),
    limbs("247328a4d9ce81603e37ea72cc5d1c895c21f09305301bf1411c0798602a6268"),
    limbs("1921909aaad03cc78a6cfbed6c1056e3d93a25a5496cafaca12af4ce324c6081"),
    limbs("0a85c0358cf388b47d14d42feafbdd4392df154f649b7213e29cf101aed00d80"),
    limbs("01bac04734a5920d65d67aaee04165de621beb56f902ca483860f7077537512e"),
    limbs("1dd1720966b3231bb00b08d6b8bac6c76dee5454f784134b93d8c70ab3eed999"),
    limbs("22897debc6eb2a7f36bee1e7f42ed4b0d37ad696535d82d39ccfbbe92e86c08e"),
    limbs("2ad01bb42b95d113b3b91ad88c69a33c1e94dc85512bc5168ee73065b387e175"),
    limbs("2e82bd0a053ce03af9aa947df5f131791529a57f8360a2cd697eaa177c6000b0"),
    limbs("2d2daeaeaa93a5f9d8b6529f00c4c6d691c3bc4efbfc8e7c2f08ae3e44e1f4bb"),
    limbs("0ab08914b2de57397983bace0b327f98c1a9c1e58c76ef2e716cc305727a0f72"),
    limbs("2758796cd1c178ed0c433c4f1b6b19d42ffa1bc884c3cd1ccca107cb2bc91998"),
    limbs("063df5b0349016e7bda4741ec898c74e4a30fc4f1b59fb713a824992311e30f4"),
    limbs("23713016555546753d41abd69e6fb91e4344b7c05838048ed0641cedc5fc6728"),
    limbs("26bdfc0a894998e693b7e2059d6a528aa86ab57eb031b96b53fe8b5adb74c075"),
    limbs("08897118f75cc8e9115dac581b9553cb407a1de135b632541bb734f53985286a"),
    limbs("02ef8eb2c7b26f7a57691ecb1e15a40afa9b3a5557abe81146ea6f6d4960c346"),
    limbs("254e8e5fc11b992348fd7a2c9f4a5a0b586bcaaf12603658b25910f63cf08b01"),
    limbs("02f41c21b73dd4e7b510dca16e7b4b4277301da5fbbd59db03d3a32b89c57b7c"),
    limbs("253f09ce9ecfd2aeeae98ba1b29806bc2871e5fc67bff13e303db99618e1d0a0"),
    limbs("04395eb655582d03f25775e66ae67be0aaf7c63ceffbbea9226b04b0e795bfc9"),
    limbs("13711235c3d21dd749e3e41bd048a32bfa2e796e26b72e05c999e6e6126e402c"),
    limbs("083c75117510a37d43b5513963fbd0f9f33590ddcc297e3cdd9ea42add7a175b"),
    limbs("26cc9b5718d84e606582d35d8fdbda944c6525ddcd7488cff21d4d0d823dcea9"),
    limbs("0e8978f047929b1a94601499634a8da020b9a46d0b1187d54504ed8a344d56e4"),
    limbs("2b11423af39a5d15be397439b5ca50aa9a6d41234acabed2006247688f6fa805"),
    limbs("21a56381040c702dda5a31a5aa275ce692685625e5aa77bbc430382573b402b6"),
    limbs("19a869e15b3f9b965016feca2cb82a2f14c800945ba49db74aad8e9346af07f6"),
    limbs("2b01c5a2baa16f9569d4670098466f05bf3ae097aa930771b76f24afa6be50d5"),
    limbs("0586148573b6b56617f94602fd6c86ad4a71b3fc67a35448d64eaea532582124"),
    limbs("040352e19809dd93bc7a2c549bc19cb007872e0599a3127a3e7704411894f98a"),
    limbs("2d6486b8e7b9549ea86cf044e8950ffa36974e842e1fef876561e1346c5a893a"),
    limbs("2ea9d2e1b7d07c9a3895565840e25843c9debe589044f305c1b5872c74e5a49f"),
    limbs("12e0dc4105acd8692b7cea0bd76da34aaeb8f6d00ecf84b4f062270413a8087a"),
    limbs("0da9c10656e6f42c3ce7c980a70c9d793db4df8307599a33a491f24b6368290f"),
    limbs("02f3551c6a648387da629c96633d5cc99360d9b89aec23c18ac76af21b11a850"),
    limbs("202de33a6fce9dfe8aeea34af1ed5c74093386c8a553d3a3da46e134731dde14"),
    limbs("07372d41054dbc009e3e91f902d57a213f043575f3427e35768a5a52482b1b7c"),
    limbs("02f7e35a4bbe9699949a819262943c97e8e938cd999cd911a9edbc716e2454fa"),
    limbs("2a27b84a7422e29b8cc73bf54bf535b011606c819b4baa6824b6123036d73ff1"),
    limbs("19527e9093b313d5d2638c863499839ff5d8e5f98e74b312fa0c63aff7161a3e"),
    limbs("08571a6b8b730363299666231e3c49ed231d1e355d93894c8562ba033147f025"),
    limbs("2c0f32778edfe932d912961c81d88e98d4fb64caea2cc2d4e3f213a5d2a1b9ed"),
    limbs("2710a63e84f8bf3b15da09e69bc24c567f84a4577610b19cc58191b2b1453ea0"),
    limbs("2d4b8440f168745ed84c3e393f75bdc0b0fb3f148e4ee77b525ebc258a953dd7"),
    limbs("234901ff3ec65e0a4f629bf6e96eaf379aea7c808ca9ee79b6b796895917684f"),
    limbs("28a529a627cfc689ba1bb3372072518c7720b450975339e87865c36be526e5e6"),
    limbs("1a1af260473d83489a6a466ddc1855fdc6e83d73b5c5c0fed554af11c6cef5eb"),
    limbs("2fd594dc14997e8e0123f3af16c9289d088264cc16a8119e8f02ab7270952924"),
    limbs("0d3564e44716de8c02d8f8278b0d2f819658234bc4db59147fa3a5dc23eec833"),
    limbs("293e9ac448bada42377dd8b02d5ae5695e886e0f8e43f01b38266aada3cfaa0d"),
    limbs("2186e961df0728bcd7b667d35e95f354cfb1ee1288aefb7e0b2381296daecdb8"),
    limbs("1b4972ee03b2787a27219cdeab7acdb5dce44bf8368a0c43e1e3b8c8a7f49e74"),
    limbs("01105ad26651d5ac52e817c32d86a3b10f05738fce996b2fa905ce1c3279522a"),
    limbs("072b770a70dab242ac30d03f5d2477595cf521ba7c91478d72e45358569ef30c"),
    limbs("1e399a42196a8061079e9d61ec97ff8c837195bb936206997f5a93021b70d275"),
    limbs("24f50ccc3a68ab3e2cba453ec40a8796a3c59735dd3303bcfadb6218aefb7d6a"),
    limbs("14fe92dc9227b42df23f8a5a0a7a2f50bc119f01dfe708b9118f75616714bd3c"),
    limbs("24713d85951736c77b66941c007d170282271958c98fd42d6b12696a7065916f"),
    limbs("05cf2ad05c75de38238f63258c8dfce0d1b698dede7feea9a97b263cce815ceb"),
    limbs("2d62695c7008a11d0c874b40395a695fffaaea6e6bfce85ae1580dc48218aa26"),
    limbs("19e47227e74d5563126770fa5ba61405ea6f348565c3aadad0830b3ef5d775a0"),
    limbs("20e43ff580378bafe2074a6b2fd50c74594537f98565f2d65ed8c15e5ca1084a"),
    limbs("264e4841309ac1aae92ddd9cb4d973e237406d50d2849c7091bf1c1bf5c1273e"),
    limbs("1238beacedd4f53b35b578af1c30c077f4289680658fb26ae1b4c0b2f710e604"),
    limbs("0d90474c262aac1913f37459d4f2055dade903de9bc02fa5fc7c137cce05fe35"),
    limbs("0f5aaf4827d5f40e00235ebd1cd1b9f6ebf3388383e692573b95cae4f653ad82"),
    limbs("2cdda4350f35334773cd823df37097ee967c28d62d0c45c34d0cee4008834893"),
    limbs("1c0c8c2ebb6860e64dc46755a7e072795bc2c78832a618bb6a2d5d0911b7d768"),
    limbs("269fa26069db1cf0cb705bc3584c0150b85642d4f243d5e68d7240b8e8c03276"),
    limbs("09b443b0a7676575b9a6d3f003609fa7c7b6226341ac8389258881d994fa91c8"),
    limbs("191b4697a8e295ab80f81b25743fe13f3fb6998e9131e99a86f22bd33e7bddbc"),
    limbs("0b488b6a875f238bc324f04288ad865c8577e8f906a971ad4bb9d91775645730"),
    limbs("275928b25e503c9c95c01b18a5d30081bb0cd31c36cd172bde1db83287f5f5e6"),
    limbs("1fde053dd87291d7e14f0f2e7b7461b49f60e4afc39cfdcde65d70f65c3b026f"),
    limbs("29b2c386816e9d3f76100e8fb9543329ff88ac29199a181358dc231aa1dd3e0b"),
    limbs("04987de3e3121811ec3c10421005e133fe1ce9c2aa7d7c54a26f425cd19767c5"),
    limbs("19a23ba97426bfa81b757e35aa3559050628665eb496ed8732d409942fb6e16b"),
    limbs("12333e97d1f0e3280b5e2f9d96561b2c04d001d2b393791a861fdc26c1b7f767"),
    limbs("23e48a5b646d353895d06928a181d75ad25c95a7672f3a1f4917ca03baff3227"),
    limbs("1b6bff423317d2c2721965972823ca2e93b8f2bb0a52245cedcd94587d596382"),
    limbs("16af0f387b9ba94c0ba6d176df30701ff378b3524680aafda4f7c4df4b088b07"),
    limbs("1bfad9c1a92234ed97c51ac7dc2d80f2e908c098b28bbe712cb75b92797a2103"),
    limbs("29bb5064073e9a6aaec7bfd94d48fe2207d90ea8962530f388442ca4d95e6256"),
    limbs("1cbe456ec3f8d8849e10fea36509acc3647edc3e765f4de7489264f5e34033e5"),
    limbs("0087a35062dbd735636f76cef6fab3b412749781f03b39b181495a62aae42424"),
    limbs("1f1219145ff0bf15d9645e347879a7347f9a6a5f3dea9a9bf9495174d228bcc3"),
    limbs("07f93fb41605d3cae1b42b92d527b2ce7cef14ad2b907702afa13d76ce02f88c"),
    limbs("0ae3de8a6edd589ab62767e92f3c19efbf32115679d2629a5ebd26c1c7d34299"),
    limbs("15b6688e877724b41ce08fb17695347b5eb8844423c71a98ebcc188c23888dcb"),
    limbs("131cdc252f00cfe48cd6cb1b15344b6fec8b176c1ca5584d76d6f9f6ad26bb13"),
    limbs("1bd570cf878b3dc1616ca32bf55e0b3fd898444d0e70d64909ec789ff11e8eed"),
    limbs("1e5a54e71ef7b9eabf717c01dd99b7262c3b43d1d6960094b8e508d1e11f03cb"),
    limbs("21c88de360b36a24fb641014feceacee94856233dfbccbdd1e9f0f35c9e7fccd"),
    limbs("2ef387dc1012ae94898b8afc9aa54a3be1f91820b61ab86f45ecb3ae21e23ac3"),
    limbs("283914da97f036349936af1157c536d9c2873fc3c1543afdbfc1c0c55cc6d5f4"),
    limbs("276ad4f7ba33971e4db2292c7ff704d15a14246a6e7d76ea79f1189066dd42c0"),
    limbs("24ca7fd6a2014d9821a624bf07950e8f64f5e6892d48e4a71cd4f63e9e2c63d8"),
    limbs("0fe8f370d24968de4dec0fae5919d8f4f666673ecae78bd7e22dc2276364afd5"),
    limbs("2f0bbec7f6a255512df348122df4b91778775ace589d4657dcc1223aafbf2586"),
    limbs("180732ee6d3ae2aa4866158f54f4d8b980013cc671d68c69a72d5955678703d1"),
    limbs("05a0b0ba16b7b0631dbe2c92f9121284974a7033a69be30407bec6b153590703"),
    limbs("2908a5a3204a9a144f6565e561bbfe9a4b664edaeba4106e1a57ac77290193db"),
    limbs("18c860a5d2537a84944a1075e804c32ec66cb5979908a8ca8cd7f2d8a7029c0f"),
    limbs("1ef80617b025bd54de5361dc2fb16cfb90c364e37f7a1f07ddb9ab292afc0e91"),
    limbs("2ab495215ccdfda498510f6d5dbfdac1429464e7788a229feae561be3d62c2c5"),
    limbs("251dc073bf23010a06bea25560e1be3ccb2c38e67d64eac680aea6c19952a7ec"),
    limbs("02201c3662a59685a511e2555643567df50772e8c150bcec0943a8af3f106847"),
    limbs("2bb9277b8021c5d354300da09101d24c72a842f97627a82065e5e67a22f465f9"),
    limbs("14f5ee46878e605585b3ded3fa8b9b7fd62a2017b6d2f30ed61339cca435e348"),
    limbs("114578668b59522fc7d794abcd2497baabd855f3fba503d5f5e0486047bf3fc4"),
    limbs("20bc06a35fe07cd507d0dd0a9da6987f228017055096ee68cd33eab3773a1146"),
    limbs("184801f655e82f8d32b94fb0612baa4ec983d1cd94cada67237670051d5fac5f"),
    limbs("1404d5fc7a2e8940778158fb2d303364892147a64bfee54b25d3906ab5b3490f"),
    limbs("251df4335e5164fcbbae73beb8cb57b809d71cb59d6e303db0560b0c1ee79e0f"),
    limbs("09a45be49f35c4f987b58d749c78c69082486d3f8777eba4103eac7190faad57"),
    limbs("2ede228b9b96b21dd5e1e6ea260a87f902c0051f1f203c788fb907df00e51177"),
    limbs("100a3118e3248ac400e6aab0e4e6b10f07e96de582c2c923a99cd14e45d6f209"),
    limbs("15872dba1f1047ac1faeac076b57513ad92ff71b6a6a2b32f27adce084894e10"),
    limbs("1f68a35d81c05733a573076ccd7946a4039da22e42959520737e4a6843283fa9"),
    limbs("2a165a1a2b018ab2fa4e581d7cb567d9b1515db27ea710af3683a8919e99a282"),
    limbs("064ff94b98a0588aa924e943ca627fcbd2ef854c66f917ae526f719fb40c6759"),
    limbs("1c8349f898cbf2d1fe6db936c53bd3564b673b72d673aaa39f9691e08283d5ef"),
    limbs("2e4628a8655d2fc84a32f10e0a95e92d0576739c07050bcb0158f156db6e7c5a"),
    limbs("0068316de71fed80213380a8757b3a9d517e7ea1e4800a22c510755a4a1ec152"),
    limbs("229e32cdf952fd49ddac8bacca9ec0a85b9f5f1e8b4ebbd995ec5b8289a54289"),
    limbs("26c9af69ab4a7e08335cdfdf33ce102a14cfafb05ad000afa7383f01b9b5b892"),
    limbs("14bc5140566915518f20d51498ca60f6e5e48678f97c1bb58e17af4db8f232d4"),
    limbs("22fe06bbaccc5b18b4a8bf2cc8c47e351291bacee5c5226fbd0cdb308734339c"),
    limbs("1dca1403773581144b083aa9b9768db5a81902626de0d81d80f53d75d247af04"),
    limbs("04152e8ca329e892a4503613f3472ee94b7e3025a592d4625f420c45c56a1f52"),
    limbs("13ce7edc9f1c7d2ed533026150f2bb6d261f379f1fbb48a8d556cc5ad7914e36"),
    limbs("24f4fa36a48be01d0bbe57854d48399d81ec03c394fb2eec544a631f4e1cb1de"),
    limbs("26e0659af8c838aacc352710f1433d9df9ccefc47bd5c487a0b3c29a01e559ec"),
    limbs("222f80f3327ff730c8ca585c067b5ce946724707601b7a4a72476c4f73e7818d"),
    limbs("19cd3a66216e859e433f64e4f9f3e2ad9c58d993ee168ceae5ebed3049ab2f87"),
    limbs("0d01aa823ee846c2cb695543c8499803101fc0ef222e3c2b44d8680e8a76188e"),
    limbs("2e17901918cb6f4fad9ac0d387757aa77c7207924e177d0826ebcc45c76488b3"),
    limbs("2e30cc49639069e2101cb479c7281e8715ce5f34d17c016430a9fa75bf484ad4"),
    limbs("18694d18fe6758b36c38ac70d1344c6d2b70249db92a74e1404683b2f00dee5c"),
    limbs("2597efc11329ee3e0c8bd40b4a78681738b4c52af4e55fb5be529996b56bffbc"),
    limbs("003ead8cba0d24715aea9ff5443d25ee640893186e6ff6c045dfc91edbbd1c94"),
    limbs("1e17e4583d68f0e1e7234d41915f2fa3c7b7c04cc2afaabd7f3bbe071cf1ca2c"),
    limbs("2d05098ef2828d71e8758837f5c973ec97b7547bdfa1433a5527168ee9f9d5c0"),
    limbs("09220ca57e2ddf5a1b2f2971627d1a74b7c1b837ade64a37e8e1f0d436051a7e"),
    limbs("22ee5c6d36a980b7a428f8afc999eb09868adc52b4fccfdb68b3f5fba518e03f"),
    limbs("1b70154b6e76cf9bcf4411203db1c19c77bc0ca8bef907ae8a4b4aac270842c1"),
    limbs("1a2ad9a834a4d41bc0d5bac3b7e9453100f58c8605fd112ef6b7a25baa7dfb88"),
    limbs("075aa06f43a273433cf8ee196e8577e5fa28844595b1f2b36f6473ffda38380d"),
    limbs("070f884d5d0093ff75fb09ce934c8733008f994efa4f556520f11ee8bcedf82a"),
    limbs("07d5a9301209de0fa56d9dee45f8480b12d33a73be02f078f7b9df6f9225ddf9"),
    limbs("0100dd4a2833b127fd800d28af04254a018853218ce565a8f615995a0f2466ea"),
    limbs("164c79e2906202e73bcfb8105c5c10829397bcb0089ce03bafc5f0e627e0d836"),
    limbs("29dec9bfa2a12f2fa1bc9158dc1d3d1ebad1d849fad58d34163d741923f8fdac"),
    limbs("27d590c95d3dddcdd43e3c40f7579dde645f33c7b0ce03d55e07978096257f88"),
    limbs("0c32e71be02fa8302d8abcb8ab2c6a3dc4e962e75955401c1e6a66157dfb965c"),
    limbs("0cecd591ea4f3cfe0c7d3edf52f4f93d60a3126433bf9b9e47710d298c31e9d3"),
    limbs("070627a0421fde844216f5f24789b3f54d44f1a06184aa81f75aa227335f264e"),
    limbs("116f5232abcabac8a8b9f1a3ac86bfa97fe285811ec2cfd733f1206f449d1de6"),
    limbs("2a8ecaecf1355850d03fa2f1a7904cf3a2ba7d3bae30aad7a35cfb4a6d7dbec1"),
    limbs("252ee8a2dfbaab265c060600b3f6e19f24e491ddd37195211f95918d3d39b911"),
    limbs("23ed5e73a4223df85afe948fdef2b6e0d3c120aa31e2f1b4c89054d5218258e8"),
    limbs("0ddef510d2c7ba32e4331ddba93aa688bb9fb86173625037b86ba4c62a0600fe"),
    limbs("2339cd5cb769acf2dafb5073bd988be15a65bf8ad06c38a82d38d317f0febe8d"),
    limbs("26fb4a101c97c06acc999150483d44aa762b585c422bf8dcb37afbfdf076ab49"),
    limbs("077d5874dba21d260cb02f280c5fdf78fb8ed9e0acada998ab5cb833b09d1858"),
    limbs("22ddb2bebc8cd1c946f8522d7326702328511313b40b4a9e812b69aeb6113220"),
    limbs("2e7c43c6222e6323f682c05c571f6aa62a3da64be2c3f381698e2c0ddadc93b5"),
    limbs("19ee0e60fc2da7a295371c667ce850772acdbbfa0a9eab7a7c94a50c9c682de5"),
    limbs("04d46d32c131ca79258ef2c525659b8138c0e199ce5968e57a82e780f1fa79b9"),
    limbs("2ddd25bd37dea23386a030f4bcc1d4382635a6dc7ea3cf3889a5e8faca46bd82"),
    limbs("0be3e9d472b8118ce3d01a92fc168de78549347b44526893312fd5ec3d2726ad"),
    limbs("27fa8f235db616a5909a2f31896dc8de9594798707b477f343b48ff528e49b8e"),
    limbs("17226412ab2fab6223eeda0b848333816a4dd6495e29ca47ce8b96f8c87aea21"),
    limbs("008a2aca609e6344086eed8a710a35469bdce68646a435a6918277a21d03d4a8"),
    limbs("27a10619eec3b5211b7ce9c318df7edfaecf7bc84098dc1c58232ac25093e35a"),
    limbs("06def2df638eab9899865393563ec8bc81897fe0f1adc5c0499755f25497fc46"),
    limbs("0c86bd5b00467b98563b7ad1b362a058538a7faa110a438b9d0ec7be8c50c098"),
    limbs("02237c3870ca51c0c9daf086524707a78be8845df471e4d4fb3f2e7f30d90214"),
    limbs("2aef4c14a514a36ce1afa9f2c5f1ede8d00530e01e2a704d70494cfd3c2982cf"),
    limbs("0f425f81861ada856f01fcf0d5ef108acea281735a913d24eea75b55833b328f"),
    limbs("1e562f2a3a83be1321eeaf564fb19f57aec9c66e6cc8fda18999d5baa0b4630f"),
    limbs("0627d8f4c1a8c8f8c5e1eb617598954aa814a756782e2cd85b79e8e1e748c705"),
    limbs("15e5ad36f719cca83a41f67782388cca380c25992e5cd14c670fd3c317b0ea5b"),
    limbs("0cc8d138d0854f9b62697b7791da960be500e3529cdefd4f0b18d16c5e757ce2"),
    limbs("17ff555b52d28be1b3c46c80946df519e9de247d2cf8d8175086f975d24c1e8b"),
    limbs("0fd5dd57c2cede876671978d2fd289aa0a02693252b74f7fdee8bd404e6c79e6"),
    limbs("203144a77c72ea89fcaff39b141def7e93a1da1fb9e22b7d0c6733bd72f06f69"),
    limbs("1979320524dfa45aa8ef35eebbcf6f621e1c855b5704d8bf755bed7daaf721d4"),
    limbs("089b6683b1f849dbbab0f1092ca04880f8b894d7f8bbcb95cade4e736ea28998"),
    limbs("2c2dd8e6610a0495784aa08bb9661fbe25c908396b5c3f2bd51109517fa28162"),
    limbs("2b9627b579ec4019306886e1ff4003aeb3a33249be5cc6b56dc3607b17e42477"),
    limbs("178f70a99501a6e05bf4ca79b2d6da47049f8c988936696519344ddd931174f5"),
    limbs("224ffa0f9d0d57eb0c7d718e99cf3b6ba01b523548ea0ca23a3f156c04083abe"),
    limbs("00f2ee1e2be1ece2cd8aef1dbfc826997d304d88cdee555ef67a799759c39ed4"),
    limbs("25757740ab14ca93745a76000e24328eb1a3d21d3cbed1930dd1ba2cbf7de236"),
    limbs("0fa6b963bc65bd930510b3ca6e1ae62c1b4675edf79ee79a7f280eae6496f16f"),
    limbs("0ccb794ddf870bb92a9cba5f859fb3cc3f4eb1f1117d14c1caef37beced0e32d"),
    limbs("123fc6d306f17fcd5a4309d4fe6e0cc1ca00fc23ea9447a7c6b68c7f6ba50005"),
    limbs("22162170a1f845eb0aa1ee7baea486212a09814a9557bcb9fc72cf90f0a29961"),
    limbs("13e385a5cd2fbda978dc7740e927ce8d422c9ee861c43036257242484e497e3a"),
    limbs("13bebd80c2022724017d8e3eb84c269810cecf47f9f57e237bb4be69410a7803"),
    limbs("13ed291502566a7033b4c4607245156a158a6fc84f4ba6f0246c1de057d8ff1c"),
    limbs("2ffa06928536af91c7ac3b7714f204e26c541142742179217095a6e54f743247"),
    limbs("2a6df655e926c4aa029749aaa7c9a40a10fd55a368624c148b5e528d4313183e"),
    limbs("27d8531ec6121a3eca74db524323fc100db502a580b8a4cf8651f1bf6b9b0238"),
    limbs("1ea104a44d82fbe1bc1ccfd4626cea0c06693422b3846b3a2b4aa12a3b0e747d"),
    limbs("1d69a3852720a88758034d954dea602e5989114a4667251b0da5915412ac5ff4"),
    limbs("1b8e232710f6c1ceeff9c1086d49cd8d2e647f6926da913cb5e10337d7f3d7e5"),
    limbs("2d40d3f8e6f9e3aa6014c69630dbfdf3169f88067574ffc9210f7da599c4fb3d"),
    limbs("24e1c2f60b1cd36101770cefc4334a8c02f00cc696df64f76df54a6fb6f0508b"),
    limbs("2408f2eb6b1e958ccadbff81c9a44913ac0c9cb5cbcb4b4054017abb3db8c04d"),
    limbs("0e3c6ecd281ba2e16aa37dacd2abc38eb07c1353dad96e87d14e5ea33ff8ecde"),
    limbs("248c7cfb7ba2e71819bfc755eb9e9a306cd0f6e3212e254090f0006d9ec543e8"),
    limbs("267fdcdeecf69d799e79f68632217df51226d8ce39574d72b4ae4f39d21721ed"),
    limbs("2bd9173ef276b7d4911ebf78dd15342eb261603c2c9afcf4ad831de9fa34bab9"),
    limbs("1cc0af33d07e50b2adda3346723006250fabad8fa3ddb365c1d8582f4dc65f14"),
    limbs("221f2bc4b7dce9195f9ca9ce8fdeaefcb05440c20dd9754bc59c11447caecebc"),
    limbs("18ebd5c63b0bf20f45d238fd0cab5dec8dbf1996bcd1b3489f3c2499ecf92b07"),
    limbs("2f338bc5a586f2774af3beb92aa92ce8e58a5efa19ddc891be47a5e77e9f5a4b"),
    limbs("0556b9c3784145eb4f2ff6e0c88f41989da5907f8c7118ae492939bfe4e9fb1e"),
    limbs("1ec100367f65684538bc6956805ed37051238a3637e47022a3294cbde38b2284"),
    limbs("1645a29dd4527ab91a4b798c7096e832073c8baac6e5db87e26c215bf448f84f"),
    limbs("22a78abf7d5b362a743ed52ef2737bbbddd375e9b3bfb42409a95ad105ac9350"),
    limbs("1a9921dead26c55aafb3ac9f3f35acb61a49d5f181e8036540830bb18686eb37"),
    limbs("0eb8645b0d2b8f0c3927d4643574c0b1a588272465d319e15fcc6c3262191aa9"),
    limbs("0e48af0cb275af55deb825a34ca48904a47c31b5592c4afa9077d60e5e7ea655"),
    limbs("17dfbac5a26f06fff967cfef597a6da11b5bc894ee6b62e626a62e85a3ea4b66"),
    limbs("0dffbd016ffd2b795226a83edbdb3c5a6f78917d7fbdbbc1b3631027c866aaa1"),
    limbs("2f948d5f70856b5f23a4338d244f6ba7e7ebfc750e16ebd1e2c2d13825094310"),
    limbs("194c9f7615cbe3eaa0f885c59e420bb89dca60fe174ea321d80435301511713c"),
    limbs("16e81a0540143cbbe662c7ae726051ec663d621562fb3701240cbfbb4b17b3cf"),
    limbs("11ef0c2d88131f715e47e9a4953f789fec78decdbeed34bc8eaa42927ea6eee2"),
    limbs("0876e45a4f862901bfc620a55951802a1d1d5c3e1414308db7d548400f668535"),
    limbs("2e78d35e1dd86776a4ddaee1192c055aa8676363bfcf3165317dcc98017e6c75"),
    limbs("19f6e589ba384db3c36adae4bc034fb9a444da42164b6ef289009a2cd7d15a6e"),
    limbs("09fed90b1f10f84f6739bdb1b4b508957acceadace687aa735dc9f6ab14404fe"),
    limbs("055e35bbef7ce5ee7a3603222e09005dd5192adcd70dc33721714137221f4831"),
    limbs("05e8dc359ee98d3bb6990fd928ecf056f9bb736e0d47cec22a96e7cac65a9828"),
    limbs("0c732297f8b0c272fac76944ee969930752a7bd3943c7b97e038bcd2315d290f"),
    limbs("16703fb8b02c94ade315d5b62aa1bf7834de248310887dc13cfd13fb6c2a10ba"),
    limbs("28715ac5265d7a812af4e39e43bf9ac80059635d01fd6fe40f3f1e059d7f7f4e"),
    limbs("2f683b0027994e095e71eec8475730fe227b480a6aca67ab1593ce6f837bcaf8"),
    limbs("0854d9c3be72187a2f198590decd43943c5aa6140a858f21595b9a08da85b323"),
    limbs("1e3d592b71a473c85b2104acc1d8db8cb9101a3cce55c66801a0d379497deadd"),
    limbs("1eb27377cfa38a3967a71e697725c195bc1d7ce047e83d0e069dee8b95a9a70a"),
    limbs("0045b9fd1e0f115801232c7aaafb5e73bc2d657c47b122f4e3ea30a659bdd9be"),
    limbs("027aefe3d1130e9394b61a804dfe2231d68295910dd39245f1e1de65a87dba6a"),
    limbs("2e4c5fa1a42064e556fc50dd7fca7b48625e4c169415487d4df0482a9b1df4eb"),
    limbs("05767cb28f1019a39627a19196a7e4672e82441be0b90523c7b9b9f74dd3315d"),
    limbs("17e443e32ab352d209d3e038d1364b24eb3f945e99a6809502c5439c807fb4dd"),
    limbs("017a0c0d83cead8ffb70978edec1bf3c4acef4a2cdcfd8c335bce42793513e43"),
    limbs("28b749b2a9becb34665e38f3c49b767f20738a481a7a76a19bf1030008a252b3"),
    limbs("1f5252eb629922c70f2fc1b5ec5ea0a0e0acee47da26c40436c3f1ffca690356"),
    limbs("29324c40ee7bc85d33a056c3fa8f44d6a7724da53ccedb3e56cc26b73358aa0e"),
    limbs("00567e9bd8a2b947d75b376a9a1af17bf8bec6c9abede582054fb3ecf7860cde"),
    limbs("1e96bab6ed6f45550f2621c0adad747c2fc9988485f6184355c3176d5c11e8d6"),
    limbs("08d47dc23b1ff527992c9eddc91259a748f6cd7c1f61874a0836f599e995a399"),
    limbs("22733cdd318150f40d89d1ac142f26750809a0b888c85743af671050cf6736a2"),
    limbs("2168174bb9c45be2ee87441174a24fd41de6bff4a377803025864c5ca1927347"),
    limbs("0b48fdaba88524ef8d0495ba63e8713b65af4a9267b5d62083e7b8726043a1e0"),
    limbs("18658643fcb63644520c0fa02dce232935a4ce8d7b733a9b17a866e50b3ec8a9"),
    limbs("2fc94cda5238fc785871bca97960b299ed0df05f6c6b28a3834865fd4974bc21"),
    limbs("1a54a91a89dd7e0ce87530303c12ef76244fcf42c38db35513d65c6d5994ab6f"),
    limbs("15610d8d64ba02952f4170eaf42a27cfb2d13f04d4673537b72510c5c4c3da22"),
    limbs("13597b4707657f437ee42087cf8b589042b277467d8a0436cf66ea44a6661212"),
    limbs("2dbb95e5114e740028bc5edf58b2e9fc7e3871d3f16ad0c3845d5e961a87837f"),
    limbs("2cb3a3e7ce16cad9596eab92d772f6b8afb43cb6492b2c363ec71e11f86c52f9"),
    limbs("286e8b9468bd2d392dad5d90ef65d28dec27de7147ce50b8edffeca5d70020a4"),
    limbs("166e762a73b519001d753737d7d908ef226237b077cb76ed9f6bbfcce9989317"),
    limbs("1dc5bee6477d7e7879fa2f33ba9adce878a57fad3845e7c9eaf4be54ab844f61"),
    limbs("1f16f7f1cd61d9563e064c86b508afec41d614abc7b34bb45174b40d3877155c"),
    limbs("28df04cdd7f79cb06fbf044e631ab11fadf9691e4ea5f6209f8751af58c8eb15"),
    limbs("18aa6490047ab52105dc1e60f448762461b7075d38a7c0b2ba95646526588fb6"),
    limbs("0076ab8143a290792147c6a6465c9a83bddf4f65388cae8357bc6bd9400ab99b"),
    limbs("2616217a94f407053cef3b234cc11acbbd2e344b403bbd8a26f821bcb6f1f8de"),
    limbs("2296862cb9a14424a34d3a11080d6ed5bfe1bc4e0301ec1cbd4e260d81675684"),
    limbs("0828428022a299903406314c159732bc0fda227a3e7a40a4834e513f3ef97c53"),
    limbs("0771ff9f397469dda6f20cf1841e702c1780a0719b3f590175b394f38279c77b"),
    limbs("0dc489dcf61aba1104925eb9439a4f44228d06dd4567fce1444965a749567975"),
    limbs("104470f92923d3b9dafa39eabdf7eaa23b6ff11b2ebb64a63bdb912d43865fa1"),
    limbs("14a490ce09c929505ad223e2f397186135aa6586b27cc9ccd4f78efbec993a6d"),
    limbs("206893bb747ca2504461fb24a2f72eae4cf330835825fb8ac9563fed9a7853ea"),
    limbs("03c2a738e753f35b068c6ac8171244c23fbd4f37c80ba508618c800acf626546"),
    limbs("129edb7a013029be80efc7400212cd7af1308100d34a569ef3646b52cfb06e16"),
    limbs("0874b0edfee05d8cddac89e7b562f917c7ece1ec2e262f226f4d1524a1ddc158"),
    limbs("10a0bab2786cda30537c696bb1ffaf898078841896f7be41cdf30ad2517b2aae"),
    limbs("0bab661c2a17fbe0221f435ba90520bced928364cac984e17a6c72a47e13fc2b"),
    limbs("2042016e686c984057a28aa2ae13c981ad8dd02ac7d4663005e1380c54f843b2"),
    limbs("1fc295ac71911a59a81d087f967f16a3a887739d7cee663fff5d6e0710cf4a42"),
    limbs("05922697b04ae608cc3bb0d9d345cadeaf4fa291de888e9b1dd32c19cb1a8777"),
    limbs("271b87d8b895c6e1d864b9cd030729e523bc90b469cee37b51144bb3b0e4b9db"),
    limbs("24aa401343e4705f22900fee892cca269d0c0ffab8f55c21c674edb9d7bba552"),
    limbs("1b07068cafe17b55b5e00f7037c9ac37ef0268d5d2b76d7271c617004f05922d"),
    limbs("1e35bad319a036cc6a2094f2a1bf2d1984a2b74aaf3e5b13a6ee30c90097cb33"),
    limbs("2ab91b9a85ce69e7bea68f4fb5b1fa0903945e039c4ddbe05eff2d5e754fc219"),
    limbs("21e979fa3a2594d2365ec70b5b3e0ddc5edb8e28fa7ec307aab14b547858f666"),
    limbs("187cffd76c5fb29795523ebe065c9c2115e73784ac6b15c596fdd68469d1ad0e"),
    limbs("18d2ff882c52b396a8c068f88c3d23f9d11d9f91c0f7fde9ef6af2180a007392"),
    limbs("0a878a77de615e83c3d430f11f326b785c1ac114e599c24e5adc1d9fb91b31f3"),
    limbs("286b9c6381700288bcc75d020ea09c45957a615576d7620a0b9af2609d39afcc"),
    limbs("1c4e5ed7db96db52059ae2da709879d489a1ac5031c35ee1b6c422d9080c3f12"),
    limbs("27141679bb9260a693b880784ff5fbc5d59457b96630e0a5c04912092a4d2abd"),
    limbs("15e337c65fa58edb6a74fdbe7cdd1901b5d019ce7dd4144a8b49eba02bf085fe"),
    limbs("08256792218c8227eca89f5114f1e7f091d88a557c69b2a956fd2dc90cae3631"),
    limbs("0c08d19af9c30a31acd3928ffb5a57de5e83367204ee67209ee7ed1bca5185da"),
    limbs("1919839ad91604c370f237d2a0aa98efac29246f93c24a1bd0f9d2b60709b6fa"),
    limbs("15bf65b02b92f40b9f0ea893ddbb0572f49375acb5958bf944c77ff6c3561a41"),
    limbs("122e02f2e0169809b22def001acc797b202d335af7bd2cf032e3a7c75ef033b5"),
    limbs("12075100dddb8098654e718605211f7f6a21f5176d380141fb39977305182469"),
    limbs("2dadbbb8fecf5ccdf01f73d0cc60b15f1bbef018a63f50f68d00b72d8adf0878"),
    limbs("14334ece05a631ab375e7cfe7b89fa0d8092ec0cee24c9fa3009edcd62ea8b71"),
    limbs("09a51856d49ec654f7d44aca57b174365ba5479d8714a09f0f6de08b34e3942c"),
    limbs("048e8feea9b828528dbc63cd3d811ed05ce9de018f4a4647ac1f685bb8f6715b"),
    limbs("204ba6f18193f747ff10980957022ecaa8fa4c13e7fa4e89730a76253c9b07f6"),
    limbs("0079e1be1622edc5742e4f811ea2c0379bff4fa82b79fde5d0c9a0d174df130e"),
    limbs("27e48eabb0ef3b22305ab720ee4c7f414e8d4dbf4360c81d1ffae4d7683f637a"),
    limbs("15571becc7f5454e45ae416a6b3576274767215f659c91ba354372d999881d5a"),
    limbs("2e6a4545ebf7c2e44af91ca7192eec4aedddbd2ac1df4f5101f7f8cdd316655e"),
    limbs("2de19fcc78800027b1932cdf6f9e959208606cbf8a07524457492867f8f6bca5"),
    limbs("2e1ca8efd1876e209fc2d62cb14446e8f3c4bdd53d6382ca86b113f3209d55f2"),
    limbs("154b3f85eaed8b65718e733ca2ca7c8af03cf8f23befc4d7c6177ac00ebad368"),
    limbs("29e58f39555d9dde7bac3df18d8eaeb2a5a50503860d20c5cd0ba2a2cf6373bd"),
    limbs("032d32032e52103ad798fb36ef7c0681504cd2d86a12c7d937ff518e57b4c3f0"),
    limbs("281de0191d30af73105e39dc174015d65dc7ff12d20888d02cec650e1a245a3a"),
    limbs("0f7e76af800ebab14281645d290607eabb062bf0afe1419133e1ffdcf70c808f"),
    limbs("27ea405bdfc6557a4dd338a2bca9819547501f6f77a588a75c014d46283f75b3"),
    limbs("0570af543efefdfddab63fb05d31edcad395ac82381491a80c825c621c7ac22b"),
    limbs("027a797e0014302478a413cede7a45cd894b0a229c8e89f56ebaec4c46692bfe"),
    limbs("1dd0e283a8ef7d0f4966a517687fc53243554a8d3c7e41d91719b36bace81516"),
    limbs("2006444695987560869df6dcde2673e5b73ee5bccbb43a05c2d8be6c59979242"),
    limbs("271926392e5f1c94437afe2c2969bea4ff3f6d83ee71394008831d24bb1b6cb6"),
    limbs("1b607ed2f130580d9a8c20ea26b33b478d6e1f00cc82f00176935a8b54cabf8e"),
    limbs("0b7a6e33808d217a9e55c23871cfdfe495c10d62b8b981784b0487e63df03e0a"),
    limbs("28ac790d462bb345ab80cd1670403943599b79edef17cf70236ecb1ef872cbc9"),
    limbs("2f8d745b1b4750fd2f932f7913095515c498be314210180c6c3077231226bb94"),
    limbs("2a3ef20e60142f17d2f3b82eef6135079523956d8bc684092eecb7a7d56d71be"),
    limbs("08119b14b83922e4b224697c2c6536cf772d067489d42672b988cb638c71a0f0"),
    limbs("1a4bae6c9cf73ea22739a275bc722c8cc83d91e7ddfd5110614a52d84ce73205"),
    limbs("1d659aebe4b37b888be3a7d7f23e362c250046c09d5326312d8d94cdb384d1be"),
    limbs("28e2fb92bf6da4e6b96730479f170760564458d95f732aae2406af4c03969f8f"),
    limbs("10f4ec3ad6f3ed3387729990456c9685786ede8e6e14b7c66311d47b8778aa68"),
    limbs("2ad366d90419107866504d4d34346e0a3c595de6e0aa51c805272ae1bcddc2d8"),
    limbs("02f1dc29a06c64c9e43d3379db0f2e8f0cd8f80351724d313ca02ad24c6dac81"),
    limbs("20086a672c397e65cb37cfb64ddab08074f173f37d0e4a1747b7f020652da64e"),
    limbs("0ef2861f4ec9ba5fec74ba22c0b7af9d458c3cd8f90c825c1f36110ca2ee9076"),
];

/// Cauchy matrix `1 / (x_i + y_j)`; row `i` produces output element `i`.
pub const MDS: [[[u64; 4]; WIDTH]; WIDTH] = [
    [
        limbs("0190f922d97c8a7dcf0a142a3be27749d1c64bc22f1c556aaa24925d158cac56"),
        limbs("1f8d3a9d2d31ab32d9bdb6375170dbba89f6f8f74d16e4fd02f3675d5fe2baad"),
        limbs("230c694139416f40422d713e13c056c45c3c631b346854523970eaea58a37df4"),
        limbs("2063a461ad06315ae5992a53a14bb598367624afc2833ccbb83af92ca0f6a334"),
        limbs("0c574e628f84b6ba9d17b9d2bfd4747e06dd68cda2383d64ce365927098c046f"),
        limbs("276428d88040a3e0f442424d2ffcb8d19becf3fb6ca02c1b5c61b5ddc53ceb90"),
        limbs("24bdf6101b2f223174e869d6aecbe8ea5b04a14c38fdf1494393cc6fdb3e42a5"),
        limbs("180fca184150c0e354b4b3a4a075824d4b68e8274943f4dd8b0c64eca25dc68e"),
        limbs("10726dcff87299c8532159976607633f1bc2ad24453c1bab26b726b82d756ebb"),
    ],
    [
        limbs("0607cd8ff9b889773c9eb68b8a4366469d470cd7c6004106caae95c10c424419"),
        limbs("2591580b73e7b5d5f34d9fdc0cf7fe3de7f6a18a255e4376fde3eb31dfa51d79"),
        limbs("093cff12150aecb3465c4c99f044be85dcc1eba21d429132c2260dd3d12ea441"),
        limbs("059116da88a081267dd888204fc6fb79046c3297ccb65f9e0fe0d50b4db44ec6"),
        limbs("2c948497373514e7d9846dea9ddf5755337ddb661043d6c628cecb8f55173bd8"),
        limbs("2c2729812be9ed432e75709133119cb0a14e1b6ea31c1279b7c3e495deaf108e"),
        limbs("2280d6d4718f9f06b551a988408f0515070e455ed63377e910be087fb79bd191"),
        limbs("1b1bba125505ae9675bcec7c9af579c5cc83533c9d555be398afa09cbf95d6a7"),
        limbs("17013257716d3cbae28e1c272cb6aaa2844136049ffbca05ca201523032c64d4"),
    ],
    [
        limbs("1da524cff60b64856dc1f5dde0ff62da7b182da26908f6ba6e590adebf91b40c"),
        limbs("2bb4565893b6ffc5799139cdc151158749c2c65db48672abaf24c5b3813c0e2b"),
        limbs("25081a00fc20ae366b1fe7ea6b09e62a51f6fd377f608368c12ba4e3bf89935f"),
        limbs("1b43719cd10b60c5647c097d1fa84b8f3c12c9c475ade13b388c7ec47240be11"),
        limbs("22dd201ecbab94a2ee393796fefcca63aa54d9a19ab9c7f20a0bedcfb9d191f2"),
        limbs("0b8e79838cd30707999c621621e77e69c0f433d543b79c668cf379b6623bac84"),
        limbs("02082d5647658eae648936cefbedfad2cd0538572aa6122ca68ccced68f432f4"),
        limbs("277bae2fc597a536adbe9c24bc8ee81731eddb574c6a5142c1c5a48c51f82e81"),
        limbs("30354c9f29c920c05e99d7cc747510e76f7fa69a71594a290eae7293c5a48441"),
    ],
    [
        limbs("22f33eaee3c481e65801b761a72832908f066fe21dab5fa5ec1d4c6e99dd6dfc"),
        limbs("1c5ce77776893d48147444b9f6d66a4da29c95707de832756c739eab8e87658f"),
        limbs("2ab8edd22fbe2a1cd3ce9a4212d0efb282ccac28af4d876fc946203070c920bd"),
        limbs("26e49154acca24424d5f8d29f650f9824de82eb7887329cbc83a56ae01dee4a2"),
        limbs("0badd77f516d4fa321d1099bc1e51909001591ad9919f08ce9718aeeb2bca4d6"),
        limbs("23671c5d1fb556063a64b5f664340936dc5ffedd4bdbaa2e96205704da5864f5"),
        limbs("020d7202ccde24901d6ce2d107e79e1fd78d6c9398ba7a4996f116adef14def3"),
        limbs("1d86496995f14264e7a054cc8224900368775c3e5ac6b5f54285f4a73c2171ae"),
        limbs("136961746d34fd196025173c4d79bf8b3d1d05291c584928d97258fd5fb4fb4e"),
    ],
    [
        limbs("075f84e9c719bb8de8e61083290daff19aaa4337454e5ba804257787470f2f54"),
        limbs("175505391c619b75530fa83e513184381e603d8449d1e070017ee8ec0a4d25f9"),
        limbs("29c5ce97710c1578a0990d862cf881badf10e4f6bde629199e803cd1c426be4e"),
        limbs("2caf86cff60521ccc5ec6e2e2c83b4707bb90f948644bfaa8f80b0afcd4cde10"),
        limbs("24f92793d67638b4abfdf48ce3b62ab5d0e1b250dc274d746f2f7d0544185b62"),
        limbs("02809dfe24c7fd7cd49b97b27150f4d38a340b60f0733fd4530cd4269b4811e4"),
        limbs("26709688150ed035f959687edf7747ee8ee946b770173dbe50390ab8c08c5f9c"),
        limbs("1e5ae4c295ad5a17e00f973f136f1230a6fb85637631b306d3705f80effac24a"),
        limbs("2310e2337e4d53c1635da18a2722178d55af583591bcc317eba842df247deaa9"),
    ],
    [
        limbs("2084be9a57e9adb80303a8dcaffd4bb77adb6815168b36a1d363b38425437135"),
        limbs("06ed1d14dedf763a3065f27e7a46d7fbf20d2b4e86a0db86692a269767d577e3"),
        limbs("1324544a54174cf7b3cd8ffc4b86320f2319d9b88c1779b89b1916018f3fb9b7"),
        limbs("2e923ea46d492247e12e0a7dccf6620f5eea6629b7532b3af246809398859633"),
        limbs("000bbbbb87eccc91d5fb07b6c55088ca514d68ddd93cf31c8ed2d2cc7f23b22b"),
        limbs("26010a3f5295bb4481310cbca5384a47af0f9905e4c76bf54b870ef0ffefa1c8"),
        limbs("0751a4a4af246255ce412c4bb47fa34a51b8628f3cd902077775c8fa488e7519"),
        limbs("28d2351619ccc6fb31ad4206e2c064bf4d9b2292b28463e53e4771f10670ddbf"),
        limbs("1815e4f7b40a7027878640a6cdc4b2854300cf6fd4953c2ac2c77625ef44ae04"),
    ],
    [
        limbs("0b303449f1bf4b92d2cbc26ab34b4215b6dd7af010747a705b2a6e3398882922"),
        limbs("140cdda33bb7a79b2baa851df5ad459e7df569b9f2c3da542d3b8d5b76b356ce"),
        limbs("1d18b25aac98b282e10b5a3a74ce5caa169a5c30bae52bba280ed517f3f82fef"),
        limbs("1ec6c32f513b8f30c7aab42e7d91aecbe54aeb188a84f8ca46bd7e9741b9a389"),
        limbs("089beeb21c346cb9bc182aa2b70f853f1a2258d56893ce5a948d9c645ecbc9bb"),
        limbs("2790643a66038cce4a6488847d8d2da2eea84961f8134b1be36947f803527e67"),
        limbs("159e25e00326a76f25c1143a5be6f53fa51ccf368d9974cc6d93cce8eb81d37c"),
        limbs("2486b884370d49a003fd041e800f0a898ab61b5e947997461ee3284241f3baaa"),
        limbs("111efc136a9dfe0ebcffae8943e679cc0fbf62fd0ce03b409fecd932a8281b10"),
    ],
    [
        limbs("0c099bc68243537203f97254f08dfb7efc09de8f96d72f3b3e0aaded45e18b4a"),
        limbs("035e9ecc464cb431cc92c3356e8a98547e843ed1324c1e971179fd1ad9fd51a0"),
        limbs("02f35e921dae87f1284c0c8ae737dbdc4936cbbb03a03a5918552fe565270a8d"),
        limbs("23a72c27f4f5e6ea5325d5b368f98b40693b2db1e8ca3d096739753dc5678303"),
        limbs("0e07b1d22eed54fdf966ffdfbcebb653b5dac3b2a91f50272876efb17158be2c"),
        limbs("05fa56d431d4bd09625a86d3623464dc90bd541ea41748f2026f65025ea9d2f2"),
        limbs("2d6f3e0e98413d5d6a1101b245c9e711bb2e956e27a5870784fd5403b39867cc"),
        limbs("213176bc1a04939fe7d6bc30691aabd6152ed24f309bff3939a0d91d54c67a66"),
        limbs("0a5a1148dad4562eab18162b3914b64d5753e9617a5154e93f7e43e6860687ea"),
    ],
    [
        limbs("1c5fd9060d4e0d999264429a5004c165570bd1675b09f977708b1ca48e616388"),
        limbs("129f06c930edd36fc2fb7044a6332751a2e3bcdbe756d883716cead6bc7063cb"),
        limbs("14a5ce1603228d6e6fade57c1da536659ba46d1b25566f12c28debcbedc5b4f4"),
        limbs("143617efcdbbc0d27a091f28039eba8abb39392e2a462850b1f9cd8532f5075f"),
        limbs("2885f2d44be0ecff57d92a4384edb5bebfb585bb23eae2a2ea50806bab8b7bd7"),
        limbs("04715db6d86b513d002589f1f9522f7de3b1a8bd702c167559ede97da2c0076d"),
        limbs("088887966c079d2e689a8d6d7bd913e92d326959bada59b99a653feaadf6c467"),
        limbs("12ded41f8047da3e6c22bfed3ec5bb52d027e560048db4c0f96ca9fa85e17bc3"),
        limbs("1f47c67a4325672f17b8bd1ddbd80e4e9e6c62419a9c204cc7e8821892431aae"),
    ],
];
