//! Coefficient tables of every registered wavelet family.
//!
//! Filters are stored in correlation order, so `dec_lo[k]` multiplies
//! `x[2n + k]`. Biorthogonal pairs are zero-padded to a common even length
//! at the offsets that keep the periodized bank a perfect reconstruction.
//! The values were generated offline in extended precision.
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use crate::family::WaveletKind;

pub(crate) struct FilterSpec {
    pub(crate) name: &'static str,
    pub(crate) kind: WaveletKind,
    pub(crate) dec_lo: &'static [f64],
    pub(crate) rec_lo: &'static [f64],
}

const fn orthogonal(name: &'static str, kind: WaveletKind, h: &'static [f64]) -> FilterSpec {
    FilterSpec {
        name,
        kind,
        dec_lo: h,
        rec_lo: h,
    }
}

const fn biorthogonal(
    name: &'static str,
    dec: &'static [f64],
    rec: &'static [f64],
) -> FilterSpec {
    FilterSpec {
        name,
        kind: WaveletKind::Biorthogonal,
        dec_lo: dec,
        rec_lo: rec,
    }
}

/// `rbio<r>.<d>` analyses with the synthesis filter of `bior<r>.<d>` and
/// vice versa.
const fn reverse(name: &'static str, dec: &'static [f64], rec: &'static [f64]) -> FilterSpec {
    FilterSpec {
        name,
        kind: WaveletKind::ReverseBiorthogonal,
        dec_lo: rec,
        rec_lo: dec,
    }
}

pub(crate) static REGISTRY: [FilterSpec; 89] = [
    orthogonal("haar", WaveletKind::Haar, &HAAR),
    orthogonal("db1", WaveletKind::Daubechies, &HAAR),
    orthogonal("db2", WaveletKind::Daubechies, &DB2),
    orthogonal("db3", WaveletKind::Daubechies, &DB3),
    orthogonal("db4", WaveletKind::Daubechies, &DB4),
    orthogonal("db5", WaveletKind::Daubechies, &DB5),
    orthogonal("db6", WaveletKind::Daubechies, &DB6),
    orthogonal("db7", WaveletKind::Daubechies, &DB7),
    orthogonal("db8", WaveletKind::Daubechies, &DB8),
    orthogonal("db9", WaveletKind::Daubechies, &DB9),
    orthogonal("db10", WaveletKind::Daubechies, &DB10),
    orthogonal("db11", WaveletKind::Daubechies, &DB11),
    orthogonal("db12", WaveletKind::Daubechies, &DB12),
    orthogonal("db13", WaveletKind::Daubechies, &DB13),
    orthogonal("db14", WaveletKind::Daubechies, &DB14),
    orthogonal("db15", WaveletKind::Daubechies, &DB15),
    orthogonal("db16", WaveletKind::Daubechies, &DB16),
    orthogonal("db17", WaveletKind::Daubechies, &DB17),
    orthogonal("db18", WaveletKind::Daubechies, &DB18),
    orthogonal("db19", WaveletKind::Daubechies, &DB19),
    orthogonal("db20", WaveletKind::Daubechies, &DB20),
    orthogonal("db21", WaveletKind::Daubechies, &DB21),
    orthogonal("db22", WaveletKind::Daubechies, &DB22),
    orthogonal("db23", WaveletKind::Daubechies, &DB23),
    orthogonal("db24", WaveletKind::Daubechies, &DB24),
    orthogonal("db25", WaveletKind::Daubechies, &DB25),
    orthogonal("db26", WaveletKind::Daubechies, &DB26),
    orthogonal("db27", WaveletKind::Daubechies, &DB27),
    orthogonal("db28", WaveletKind::Daubechies, &DB28),
    orthogonal("db29", WaveletKind::Daubechies, &DB29),
    orthogonal("db30", WaveletKind::Daubechies, &DB30),
    orthogonal("db31", WaveletKind::Daubechies, &DB31),
    orthogonal("db32", WaveletKind::Daubechies, &DB32),
    orthogonal("db33", WaveletKind::Daubechies, &DB33),
    orthogonal("db34", WaveletKind::Daubechies, &DB34),
    orthogonal("db35", WaveletKind::Daubechies, &DB35),
    orthogonal("db36", WaveletKind::Daubechies, &DB36),
    orthogonal("db37", WaveletKind::Daubechies, &DB37),
    orthogonal("db38", WaveletKind::Daubechies, &DB38),
    orthogonal("sym2", WaveletKind::Symlet, &DB2),
    orthogonal("sym3", WaveletKind::Symlet, &DB3),
    orthogonal("sym4", WaveletKind::Symlet, &SYM4),
    orthogonal("sym5", WaveletKind::Symlet, &SYM5),
    orthogonal("sym6", WaveletKind::Symlet, &SYM6),
    orthogonal("sym7", WaveletKind::Symlet, &SYM7),
    orthogonal("sym8", WaveletKind::Symlet, &SYM8),
    orthogonal("sym9", WaveletKind::Symlet, &SYM9),
    orthogonal("sym10", WaveletKind::Symlet, &SYM10),
    orthogonal("sym11", WaveletKind::Symlet, &SYM11),
    orthogonal("sym12", WaveletKind::Symlet, &SYM12),
    orthogonal("sym13", WaveletKind::Symlet, &SYM13),
    orthogonal("sym14", WaveletKind::Symlet, &SYM14),
    orthogonal("sym15", WaveletKind::Symlet, &SYM15),
    orthogonal("sym16", WaveletKind::Symlet, &SYM16),
    orthogonal("sym17", WaveletKind::Symlet, &SYM17),
    orthogonal("sym18", WaveletKind::Symlet, &SYM18),
    orthogonal("sym19", WaveletKind::Symlet, &SYM19),
    orthogonal("sym20", WaveletKind::Symlet, &SYM20),
    orthogonal("coif1", WaveletKind::Coiflet, &COIF1),
    orthogonal("coif2", WaveletKind::Coiflet, &COIF2),
    orthogonal("coif3", WaveletKind::Coiflet, &COIF3),
    orthogonal("coif4", WaveletKind::Coiflet, &COIF4),
    orthogonal("coif5", WaveletKind::Coiflet, &COIF5),
    biorthogonal("bior1.1", &HAAR, &HAAR),
    biorthogonal("bior1.3", &BIOR1_3_DEC, &BIOR1_3_REC),
    biorthogonal("bior1.5", &BIOR1_5_DEC, &BIOR1_5_REC),
    biorthogonal("bior2.2", &BIOR2_2_DEC, &BIOR2_2_REC),
    biorthogonal("bior2.4", &BIOR2_4_DEC, &BIOR2_4_REC),
    biorthogonal("bior2.6", &BIOR2_6_DEC, &BIOR2_6_REC),
    biorthogonal("bior2.8", &BIOR2_8_DEC, &BIOR2_8_REC),
    biorthogonal("bior3.1", &BIOR3_1_DEC, &BIOR3_1_REC),
    biorthogonal("bior3.3", &BIOR3_3_DEC, &BIOR3_3_REC),
    biorthogonal("bior3.5", &BIOR3_5_DEC, &BIOR3_5_REC),
    biorthogonal("bior3.7", &BIOR3_7_DEC, &BIOR3_7_REC),
    biorthogonal("bior3.9", &BIOR3_9_DEC, &BIOR3_9_REC),
    biorthogonal("bior4.4", &BIOR4_4_DEC, &BIOR4_4_REC),
    reverse("rbio1.1", &HAAR, &HAAR),
    reverse("rbio1.3", &BIOR1_3_DEC, &BIOR1_3_REC),
    reverse("rbio1.5", &BIOR1_5_DEC, &BIOR1_5_REC),
    reverse("rbio2.2", &BIOR2_2_DEC, &BIOR2_2_REC),
    reverse("rbio2.4", &BIOR2_4_DEC, &BIOR2_4_REC),
    reverse("rbio2.6", &BIOR2_6_DEC, &BIOR2_6_REC),
    reverse("rbio2.8", &BIOR2_8_DEC, &BIOR2_8_REC),
    reverse("rbio3.1", &BIOR3_1_DEC, &BIOR3_1_REC),
    reverse("rbio3.3", &BIOR3_3_DEC, &BIOR3_3_REC),
    reverse("rbio3.5", &BIOR3_5_DEC, &BIOR3_5_REC),
    reverse("rbio3.7", &BIOR3_7_DEC, &BIOR3_7_REC),
    reverse("rbio3.9", &BIOR3_9_DEC, &BIOR3_9_REC),
    reverse("rbio4.4", &BIOR4_4_DEC, &BIOR4_4_REC),
];

const HAAR: [f64; 2] = [
    0.7071067811865476,
    0.7071067811865476,
];

const DB2: [f64; 4] = [
    0.48296291314453416,
    0.8365163037378079,
    0.2241438680420134,
    -0.12940952255126037,
];

const DB3: [f64; 6] = [
    0.33267055295008263,
    0.8068915093110925,
    0.45987750211849154,
    -0.13501102001025458,
    -0.08544127388202666,
    0.03522629188570953,
];

const DB4: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529157,
    0.6308807679298589,
    -0.027983769416859854,
    -0.18703481171909309,
    0.030841381835560764,
    0.0328830116668852,
    -0.010597401785069032,
];

const DB5: [f64; 10] = [
    0.16010239797419293,
    0.6038292697971896,
    0.7243085284377729,
    0.13842814590132074,
    -0.24229488706638203,
    -0.032244869584638375,
    0.07757149384004572,
    -0.006241490212798274,
    -0.012580751999081999,
    0.0033357252854737712,
];

const DB6: [f64; 12] = [
    0.11154074335010947,
    0.49462389039845306,
    0.7511339080210954,
    0.31525035170919763,
    -0.22626469396543983,
    -0.12976686756726194,
    0.09750160558732304,
    0.027522865530305727,
    -0.03158203931748603,
    0.0005538422011614961,
    0.004777257510945511,
    -0.0010773010853084796,
];

const DB7: [f64; 14] = [
    0.07785205408500918,
    0.3965393194819173,
    0.7291320908462351,
    0.4697822874051931,
    -0.14390600392856498,
    -0.22403618499387498,
    0.07130921926683026,
    0.08061260915108308,
    -0.03802993693501441,
    -0.01657454163066688,
    0.01255099855609984,
    0.0004295779729213665,
    -0.0018016407040474908,
    0.00035371379997452024,
];

const DB8: [f64; 16] = [
    0.05441584224310401,
    0.31287159091429995,
    0.6756307362972898,
    0.5853546836542067,
    -0.015829105256349306,
    -0.2840155429615469,
    0.0004724845739132828,
    0.12874742662047847,
    -0.017369301001807547,
    -0.044088253930794755,
    0.013981027917398282,
    0.008746094047405777,
    -0.004870352993451574,
    -0.00039174037337694705,
    0.0006754494064505693,
    -0.00011747678412476953,
];

const DB9: [f64; 18] = [
    0.038077947363878345,
    0.24383467461259034,
    0.6048231236901112,
    0.6572880780513005,
    0.13319738582500756,
    -0.2932737832791749,
    -0.09684078322297646,
    0.14854074933810638,
    0.03072568147933338,
    -0.06763282906132997,
    0.00025094711483145197,
    0.022361662123679096,
    -0.004723204757751397,
    -0.00428150368246343,
    0.0018476468830562265,
    0.00023038576352319597,
    -0.0002519631889427101,
    3.93473203162716e-05,
];

const DB10: [f64; 20] = [
    0.026670057900555554,
    0.1881768000776915,
    0.5272011889317256,
    0.6884590394536035,
    0.2811723436605775,
    -0.24984642432731538,
    -0.19594627437737705,
    0.12736934033579325,
    0.09305736460357235,
    -0.07139414716639708,
    -0.029457536821875813,
    0.033212674059341,
    0.0036065535669561697,
    -0.010733175483330575,
    0.001395351747052901,
    0.001992405295185056,
    -0.0006858566949597116,
    -0.00011646685512928545,
    9.358867032006959e-05,
    -1.3264202894521244e-05,
];

const DB11: [f64; 22] = [
    0.018694297761471083,
    0.1440670211506245,
    0.44989976435604534,
    0.6856867749162006,
    0.41196436894790744,
    -0.16227524502749036,
    -0.27423084681794696,
    0.0660435881966832,
    0.14981201246637849,
    -0.046479955116684187,
    -0.0664387856950252,
    0.031335090219046076,
    0.020840904360181062,
    -0.0153648209062016,
    -0.0033408588730144454,
    0.004928417656059041,
    -0.0003085928588151432,
    -0.0008930232506662646,
    0.0002491525235528235,
    5.4439074699368475e-05,
    -3.4634984186984996e-05,
    4.49427427723651e-06,
];

const DB12: [f64; 24] = [
    0.013112257957229518,
    0.10956627282118515,
    0.37735513521421266,
    0.6571987225793071,
    0.5158864784278157,
    -0.04476388565377463,
    -0.3161784537527855,
    -0.023779257256069726,
    0.18247860592757967,
    0.00535956967435215,
    -0.09643212009650708,
    0.010849130255822185,
    0.04154627749508444,
    -0.01221864906974828,
    -0.012840825198300683,
    0.00671149900879551,
    0.0022486072409952378,
    -0.0021795036186277603,
    6.545128212509596e-06,
    0.00038865306282093143,
    -8.850410920820432e-05,
    -2.4241545757030785e-05,
    1.2776952219379767e-05,
    -1.529071758068511e-06,
];

const DB13: [f64; 26] = [
    0.009202133538962367,
    0.08286124387290278,
    0.31199632216043804,
    0.6110558511587877,
    0.5888895704312189,
    0.08698572617964724,
    -0.31497290771138864,
    -0.12457673075081525,
    0.17947607942933985,
    0.07294893365677717,
    -0.10580761818793433,
    -0.026488406475343694,
    0.05613947710028343,
    0.0023799722540590786,
    -0.02383142071032365,
    0.003923941448797416,
    0.007255589401617566,
    -0.0027619112346568622,
    -0.001315673911892299,
    0.0009323261308672633,
    4.9251525126289464e-05,
    -0.0001651289885565055,
    3.0678537579325496e-05,
    1.0441930571408138e-05,
    -4.700416479360868e-06,
    5.220035098454864e-07,
];

const DB14: [f64; 28] = [
    0.006461153460087948,
    0.0623647588493989,
    0.2548502677926214,
    0.5543056179408938,
    0.6311878491048568,
    0.21867068775890652,
    -0.27168855227874805,
    -0.21803352999327605,
    0.1383952138648066,
    0.1399890165844607,
    -0.08674841156816969,
    -0.07154895550404614,
    0.05523712625921604,
    0.026981408307912916,
    -0.030185351540390634,
    -0.005615049530356959,
    0.01278949326633341,
    -0.000746218989268385,
    -0.0038496388680221874,
    0.001061691085606762,
    0.0007080211542355279,
    -0.0003868319473129545,
    -4.1777245770372596e-05,
    6.87550425269751e-05,
    -1.0337209184570774e-05,
    -4.389704901781394e-06,
    1.7249946753678127e-06,
    -1.7871399683113592e-07,
];

const DB15: [f64; 30] = [
    0.004538537361578899,
    0.04674339489276627,
    0.20602386398699574,
    0.4926317717081396,
    0.6458131403574243,
    0.3390025354547315,
    -0.19320413960914543,
    -0.28888259656696563,
    0.06528295284877282,
    0.190146714007123,
    -0.039666176555790945,
    -0.1111209360372317,
    0.033877143923507685,
    0.05478055058450761,
    -0.025767007328439964,
    -0.020810050169693083,
    0.015083918027835902,
    0.005101000360407543,
    -0.006487734560315745,
    -0.00024175649076162427,
    0.0019433239803822114,
    -0.000373482354137617,
    -0.0003595652443624688,
    0.00015589648992059973,
    2.5792699155318936e-05,
    -2.8133296266047814e-05,
    3.36298718173758e-06,
    1.8112704079405772e-06,
    -6.316882325881664e-07,
    6.133359913305752e-08,
];

const DB16: [f64; 32] = [
    0.003189220925347738,
    0.034907714323673344,
    0.16506428348885313,
    0.4303127228460038,
    0.637356332083789,
    0.4402902568863569,
    -0.08975108940248964,
    -0.3270633105279177,
    -0.027918208133028276,
    0.2111906939471043,
    0.027340263752716042,
    -0.1323883055638104,
    -0.006239722752474872,
    0.07592423604427631,
    -0.007588974368857738,
    -0.03688839769173014,
    0.01029765964095597,
    0.013993768859828731,
    -0.006990014563413916,
    -0.00364427962149839,
    0.003128023381206269,
    0.00040789698084971285,
    -0.0009410217493595676,
    0.00011424152003872239,
    0.00017478724522533817,
    -6.103596621410936e-05,
    -1.3945668988208893e-05,
    1.1336608661276258e-05,
    -1.0435713423116066e-06,
    -7.363656785451205e-07,
    2.3087840868575457e-07,
    -2.109339630100743e-08,
];

const DB17: [f64; 34] = [
    0.0022418070010373128,
    0.025985393703606044,
    0.1312149033078244,
    0.37035072415264114,
    0.6109966156846228,
    0.5183157640569378,
    0.027314970403293636,
    -0.32832074836396175,
    -0.1265997522158827,
    0.197310589565011,
    0.10113548917747027,
    -0.1268156917782863,
    -0.05709141963167693,
    0.08110598665416088,
    0.022312336178103798,
    -0.04692243838926974,
    -0.0032709555358192938,
    0.02273367658394627,
    -0.003042989981354637,
    -0.008602921520322855,
    0.0029679966915260947,
    0.0023012052421535457,
    -0.0014368453048029762,
    -0.00032813251940983797,
    0.0004394654277686437,
    -2.5610109566548458e-05,
    -8.204803202453391e-05,
    2.3186813798745952e-05,
    6.9906009850767515e-06,
    -4.505942477222988e-06,
    3.0165496099945573e-07,
    2.957700933316857e-07,
    -8.42394844600268e-08,
    7.2674929685616085e-09,
];

const DB18: [f64; 36] = [
    0.0015763102184407605,
    0.019288531724146376,
    0.10358846582242359,
    0.3146789413370317,
    0.5718268077666072,
    0.5718016548886513,
    0.14722311196992816,
    -0.29365404073655876,
    -0.21648093400514298,
    0.14953397556537779,
    0.1670813127632574,
    -0.09233188415084628,
    -0.10675224665982849,
    0.06488721621190545,
    0.057051247738536884,
    -0.044526141902982326,
    -0.023733210395860002,
    0.02667070592647059,
    0.006262167954305707,
    -0.013051480946612001,
    0.00011863003385811746,
    0.004943343605466738,
    -0.0011187326669924971,
    -0.0013405962983361066,
    0.0006284656829651457,
    0.0002135815619103407,
    -0.00019864855231174796,
    -1.5359171235347246e-07,
    3.7412378807400385e-05,
    -8.520602537446696e-06,
    -3.332634478885822e-06,
    1.7687129836276155e-06,
    -7.691632689885177e-08,
    -1.1760987670282317e-07,
    3.068835863045175e-08,
    -2.5079344549485983e-09,
];

const DB19: [f64; 38] = [
    0.0011086697631817106,
    0.014281098450764397,
    0.08127811326545956,
    0.26438843174089677,
    0.5244363774646549,
    0.6017045491275379,
    0.26089495265103885,
    -0.22809139421548263,
    -0.28583863175582624,
    0.07465226970810326,
    0.21234974330627848,
    -0.03351854190230288,
    -0.1427856950387366,
    0.027584350625628667,
    0.08690675555581223,
    -0.02650123625012304,
    -0.04567422627723091,
    0.02162376740958505,
    0.019375549889176127,
    -0.013988388678535142,
    -0.005866922281012175,
    0.007040747367105243,
    0.0007689543592575484,
    -0.002687551800701582,
    0.00034180865345859575,
    0.0007358025205054352,
    -0.000260676135678628,
    -0.00012460079173415878,
    8.711270467219923e-05,
    5.105950487073886e-06,
    -1.6640176297154945e-05,
    3.0109643162965265e-06,
    1.531931476691193e-06,
    -6.862755657769143e-07,
    1.4470882987978445e-08,
    4.6369377757826045e-08,
    -1.1164020670358259e-08,
    8.666848838997619e-10,
];

const DB20: [f64; 40] = [
    0.0007799536136668463,
    0.010549394624950399,
    0.06342378045908152,
    0.21994211355139703,
    0.4726961853109017,
    0.6104932389385939,
    0.36150229873933104,
    -0.13921208801148388,
    -0.32678680043403496,
    -0.016727088309077008,
    0.22829105081991632,
    0.0398502464577712,
    -0.15545875070726795,
    -0.024716827338613585,
    0.10229171917444256,
    0.005632246857307436,
    -0.06172289962468046,
    0.005874681811811827,
    0.03229429953076958,
    -0.00878932492390156,
    -0.01381052613715192,
    0.006721627302259457,
    0.004420542387045791,
    -0.0035814942596096226,
    -0.0008315621728225569,
    0.0013925596193231364,
    -5.349759843997695e-05,
    -0.00038510474869921763,
    0.00010153288973670291,
    6.77428082837773e-05,
    -3.710586183394713e-05,
    -4.376143862183997e-06,
    7.2412482876736205e-06,
    -1.0119940100188862e-06,
    -6.847079597000557e-07,
    2.6339242262700013e-07,
    2.0143220235505126e-10,
    -1.814843248299696e-08,
    4.056127055551833e-09,
    -2.9988364896193194e-10,
];

const DB21: [f64; 42] = [
    0.0005488225098526838,
    0.007776639052354784,
    0.049247771538177276,
    0.1813596254403815,
    0.4196879449393628,
    0.6015060949350038,
    0.4445904519276003,
    -0.03572291961725529,
    -0.3356640895305295,
    -0.11239707156845098,
    0.2115645276808724,
    0.1152332984396871,
    -0.1399404249325472,
    -0.08177594298086382,
    0.09660039032372422,
    0.04572340574922879,
    -0.06497750489373232,
    -0.018653859202118515,
    0.039726835427850445,
    0.0033577563903381107,
    -0.02089205367797908,
    0.002403470920805435,
    0.008988824381971912,
    -0.0028913343485889014,
    -0.002958374038932831,
    0.001716607040630624,
    0.0006394185005120303,
    -0.0006906711170821016,
    -3.196406277680437e-05,
    0.00019366465041650805,
    -3.635520250086338e-05,
    -3.4996659849874476e-05,
    1.535482509276049e-05,
    2.790330539814487e-06,
    -3.0900171645456993e-06,
    3.1660954423670305e-07,
    2.9921366304648526e-07,
    -1.0004008790305973e-07,
    -2.2540149746733303e-09,
    7.058033541231122e-09,
    -1.4719541976503653e-09,
    1.0388055710237066e-10,
];

const DB22: [f64; 44] = [
    0.00038626323149109823,
    0.0057218546313345395,
    0.03806993723641108,
    0.14836754089011142,
    0.3677286834460375,
    0.5784327310095244,
    0.5079010906221639,
    0.07372450118363015,
    -0.3127265804282962,
    -0.2005684061048871,
    0.16409318810676649,
    0.1799731879928913,
    -0.09711079840911471,
    -0.1317681376866834,
    0.06807631439273222,
    0.08455737636682607,
    -0.05136425429744413,
    -0.046530811827506714,
    0.03697084662069802,
    0.02058670762756536,
    -0.023480001344493188,
    -0.006213782849364659,
    0.012564725218343373,
    0.0003001373985076436,
    -0.005455691986156717,
    0.0010442607391860253,
    0.0018270104956572791,
    -0.0007706909881231197,
    -0.00042378739983918006,
    0.0003286094142136787,
    4.345899904532003e-05,
    -9.40522363481576e-05,
    1.1374349662125932e-05,
    1.7373756957561893e-05,
    -6.166729316467578e-06,
    -1.5651791319951602e-06,
    1.2951820573188775e-06,
    -8.779879873361287e-08,
    -1.2833362287517545e-07,
    3.7612287493373625e-08,
    1.6801714049229888e-09,
    -2.729623146632976e-09,
    5.33593882166749e-10,
    -3.602113484339555e-11,
];

const DB23: [f64; 46] = [
    0.00027190419412828886,
    0.004202748893183833,
    0.029310003657884116,
    0.12051553178397194,
    0.3184508138528652,
    0.5449311478735205,
    0.5510185172419194,
    0.18139262536384002,
    -0.2613921480306441,
    -0.27140209860784303,
    0.09212540708241805,
    0.22357365824204023,
    -0.03303744709428938,
    -0.16401132153187592,
    0.0202830745756493,
    0.11229704361810729,
    -0.02112621235622724,
    -0.0702073915749011,
    0.021765856834499976,
    0.038495332522569196,
    -0.01852351365015616,
    -0.017537101003035845,
    0.012751943931528287,
    0.006031840650024163,
    -0.007075319273706152,
    -0.0011348654733562516,
    0.003122876449818145,
    -0.0002465014005163512,
    -0.0010612312288866513,
    0.00031942049270990115,
    0.00025676245200787374,
    -0.0001500218503490341,
    -3.378894834120904e-05,
    4.426071203109246e-05,
    -2.6352078892491864e-06,
    -8.347875567854625e-06,
    2.39756954684024e-06,
    8.147574834779447e-07,
    -5.339005405209421e-07,
    1.853091785633965e-08,
    5.4175491795392784e-08,
    -1.3999354954379989e-08,
    -9.472885901812052e-10,
    1.0504464536965433e-09,
    -1.9324051113134174e-10,
    1.250203302351041e-11,
];

const DB24: [f64; 48] = [
    0.00019143580094755136,
    0.0030820817149054946,
    0.02248233994971641,
    0.0972622358336252,
    0.2729089160677263,
    0.504371040839925,
    0.574939221095542,
    0.2809855532337119,
    -0.18727140688515623,
    -0.31794307899936275,
    0.004776613684344728,
    0.23923738878031087,
    0.04252872964148383,
    -0.1711753513703469,
    -0.038777173577920016,
    0.12101630346922423,
    0.020980113709144814,
    -0.08216165420800167,
    -0.004578436241819222,
    0.05130162003998088,
    -0.004944709428125628,
    -0.02821310709490189,
    0.007661721881646586,
    0.013049970871085736,
    -0.006291435370018188,
    -0.004746568786323114,
    0.0037360461782825235,
    0.0011537649368394815,
    -0.0016964568189748244,
    -4.41618485614152e-05,
    0.000586127059318311,
    -0.00011812332379695547,
    -0.0001460079817762617,
    6.559388639305635e-05,
    2.1832414604665582e-05,
    -2.0228882926126976e-05,
    1.3411577508091147e-08,
    3.901100338597703e-06,
    -8.980253143938407e-07,
    -4.032507756879972e-07,
    2.1663396532785745e-07,
    -5.0576454197925e-10,
    -2.2557403881760862e-08,
    5.157776789672e-09,
    4.748375824256231e-10,
    -4.0246586445843797e-10,
    6.99180115763823e-11,
    -4.34278250380371e-12,
];

const DB25: [f64; 50] = [
    0.0001348029793470189,
    0.0022569595918547794,
    0.017186741254040155,
    0.07803586287213267,
    0.23169350788602183,
    0.4596834151460946,
    0.5816368967460578,
    0.3678850748029467,
    -0.09717464096463814,
    -0.3364730796417461,
    -0.08758761458765466,
    0.2245378197451017,
    0.11815528671995985,
    -0.15056021375057962,
    -0.09850861528996022,
    0.10663380501847795,
    0.0667521644940186,
    -0.0770841110565742,
    -0.03717396286112251,
    0.0536179093987795,
    0.015542605929102291,
    -0.03404232046065334,
    -0.0030798367948470366,
    0.018922804476627628,
    -0.0019894257822027366,
    -0.008860702618046369,
    0.0027269362587384956,
    0.003322707773973192,
    -0.0018424842902033313,
    -0.000899977423746295,
    0.0008772581936748275,
    0.00011532124404663005,
    -0.0003098800990984698,
    3.543714523276059e-05,
    7.904640003965528e-05,
    -2.7330481199600417e-05,
    -1.2771952931997837e-05,
    8.990661393062588e-06,
    5.232827708153076e-07,
    -1.7792013326536346e-06,
    3.212037518862519e-07,
    1.9228067901423717e-07,
    -8.656941732278507e-08,
    -2.6115985561117707e-09,
    9.279224480081372e-09,
    -1.8804157550621554e-09,
    -2.228474910228169e-10,
    1.5359015701626572e-10,
    -2.5276251634656447e-11,
    1.5096920828239108e-12,
];

const DB26: [f64; 52] = [
    9.493795750710593e-05,
    0.0016505202335329882,
    0.0130975542925585,
    0.062274744025149605,
    0.1950394387167701,
    0.4132929622783564,
    0.5736690430342223,
    0.43915831178916626,
    0.0017740767809866858,
    -0.32638459369178,
    -0.1748399612893925,
    0.1812918323111227,
    0.18275540958967237,
    -0.10432390028592704,
    -0.1479771932752545,
    0.06982318611329237,
    0.10648240524980863,
    -0.053448561681483195,
    -0.06865475960403591,
    0.042232185796372036,
    0.03853571597111186,
    -0.03137811036306776,
    -0.017760903568358185,
    0.020734920179963826,
    0.005829580555318888,
    -0.01178549790619303,
    -0.0005287383992626815,
    0.005601947239423805,
    -0.000939058250473829,
    -0.002145530281567621,
    0.0008383488056543616,
    0.0006161382204574344,
    -0.00043195570742618077,
    -0.0001060574748283804,
    0.00015747952386074935,
    -5.277795493037869e-06,
    -4.1096739963914775e-05,
    1.074221540872195e-05,
    7.000078682964987e-06,
    -3.887400161856795e-06,
    -4.6504632206402627e-07,
    7.939210633709952e-07,
    -1.0790042375786714e-07,
    -8.90446637016859e-08,
    3.40779562129073e-08,
    2.169328259850323e-09,
    -3.776010478532324e-09,
    6.780047245828637e-10,
    1.0023031910465269e-10,
    -5.840408185341171e-11,
    9.130510016371797e-12,
    -5.251871224244435e-13,
];

const DB27: [f64; 54] = [
    6.687131385431931e-05,
    0.0012055312316732133,
    0.00995258878087662,
    0.04945259998290488,
    0.16292202750239332,
    0.3671102141253898,
    0.5538498609904801,
    0.493406122677999,
    0.10284085506182292,
    -0.2897168033145949,
    -0.24826458190326056,
    0.11482301951778535,
    0.22727328841417083,
    -0.03878641863180231,
    -0.1780317409590086,
    0.015799397460240484,
    0.13119797171715533,
    -0.014062751555808765,
    -0.09102290652956592,
    0.01731101826549371,
    0.05796940573471799,
    -0.018512493561998078,
    -0.03273906663102087,
    0.016146966922395666,
    0.015665595648924578,
    -0.011577186458976282,
    -0.005862096345462926,
    0.0068566356096848805,
    0.0013426268773036795,
    -0.0033328544695200063,
    0.00014575296259317286,
    0.001301177450244135,
    -0.00034183512269154277,
    -0.00038790185741013276,
    0.00020197198796903268,
    7.660058387068577e-05,
    -7.711145517797584e-05,
    -3.5174836149074453e-06,
    2.0634426477368854e-05,
    -3.901164070638425e-06,
    -3.657500908187105e-06,
    1.6343696247256378e-06,
    3.050880686251999e-07,
    -3.4724681473943893e-07,
    3.2865589680551595e-08,
    4.0262550528669086e-08,
    -1.3213322739900565e-08,
    -1.3094656068569551e-09,
    1.5216149847785218e-09,
    -2.415526928011131e-10,
    -4.3749862242936544e-11,
    2.2136620880676626e-11,
    -3.295790122476586e-12,
    1.828188352882425e-13,
];

const DB28: [f64; 56] = [
    4.710807775014051e-05,
    0.000879498515984387,
    0.007542650377646859,
    0.039092608115405346,
    0.13513791425364105,
    0.32256336128552243,
    0.5249982316303355,
    0.5305162934414858,
    0.20017614404598444,
    -0.23049895404758253,
    -0.30132780953264177,
    0.0328578791633871,
    0.24580815137375955,
    0.03690688531571127,
    -0.18287733073298493,
    -0.04683823374455168,
    0.1346275679102261,
    0.0344786312750997,
    -0.09768535580565244,
    -0.0173419228313059,
    0.06774789550190934,
    0.0034480189555409512,
    -0.04333336861608628,
    0.004431732910062988,
    0.024688060010151867,
    -0.006815549764552309,
    -0.01206359196821849,
    0.005838816627748945,
    0.0047848631124542415,
    -0.003725461247074255,
    -0.0013603738456396924,
    0.0018759986682027956,
    0.00014156723931404644,
    -0.000748674955911463,
    0.00011546560636589213,
    0.00022957909822334563,
    -8.903901490044488e-05,
    -4.9077134161902505e-05,
    3.6414012110508025e-05,
    4.638664981394295e-06,
    -1.0043260413334226e-05,
    1.2479003175748342e-06,
    1.8403637345177692e-06,
    -6.670215479954893e-07,
    -1.7574611732098427e-07,
    1.4906600135353622e-07,
    -8.262387315626558e-09,
    -1.78413869087571e-08,
    5.044047056383437e-09,
    6.944540328946227e-10,
    -6.077041247229011e-10,
    8.492220011056382e-11,
    1.8673672637833906e-11,
    -8.3654904712588e-12,
    1.1888505334059015e-12,
    -6.367772354714857e-14,
];

const DB29: [f64; 58] = [
    3.318966279841525e-05,
    0.0006409516803044435,
    0.0057021265177733755,
    0.030773580221408376,
    0.11137011695174052,
    0.28065345597098296,
    0.4897588047621993,
    0.5513744327583752,
    0.2891052383358292,
    -0.15402873445990006,
    -0.33004094891758806,
    -0.055706800072940856,
    0.23610523615302595,
    0.11241917487318838,
    -0.16087798859418773,
    -0.10784594993872142,
    0.11447229589381826,
    0.08322074716244976,
    -0.0851254926156355,
    -0.055027489525325726,
    0.06347916458421186,
    0.030531543272704135,
    -0.04518798127778834,
    -0.012917142554266795,
    0.02947043187174764,
    0.002648327307678168,
    -0.01704122457360669,
    0.001737880332720511,
    0.008469725493560752,
    -0.0025508071277894726,
    -0.0034737989896811007,
    0.0018771209257236502,
    0.001087053942226063,
    -0.0010007783270856805,
    -0.00020007113630767797,
    0.0004111283454742767,
    -2.2920180412145e-05,
    -0.00012930448400807207,
    3.645026068562775e-05,
    2.913344750169041e-05,
    -1.6573283953066164e-05,
    -3.5936448040251875e-06,
    4.7506092464525525e-06,
    -3.029054592052818e-07,
    -8.975701750636281e-07,
    2.633898386997697e-07,
    9.387197411095864e-08,
    -6.286156922010786e-08,
    1.0765919066191961e-09,
    7.768978854770062e-09,
    -1.893995386171984e-09,
    -3.426800863263089e-10,
    2.4070994535093427e-10,
    -2.940589250764533e-11,
    -7.832509733627818e-12,
    3.1527624133703105e-12,
    -4.2856548700683443e-13,
    2.219191311588303e-14,
];

const DB30: [f64; 60] = [
    2.3386161727314215e-05,
    0.0004666379504285509,
    0.004300797165048069,
    0.02413083267158838,
    0.0912383040670157,
    0.2420206709402141,
    0.4504878218533178,
    0.5575722329128364,
    0.36624268337162796,
    -0.06618367077593731,
    -0.3329669750208556,
    -0.14196851333008292,
    0.19946212158066431,
    0.17782987324483673,
    -0.11455821943270778,
    -0.1572368179599938,
    0.07277865897036442,
    0.12274774604500938,
    -0.053806465458257076,
    -0.08765869003638366,
    0.04380166467141773,
    0.0567123657447357,
    -0.03567339749675961,
    -0.03226375891935221,
    0.027078619595294184,
    0.015287960769857396,
    -0.01839974386811734,
    -0.005296859666131087,
    0.01091563165830489,
    0.0006196717564977244,
    -0.005530730148192003,
    0.0008433845866620934,
    0.002324520094060099,
    -0.0008609276968110424,
    -0.0007678782504380919,
    0.0005050948239033468,
    0.00017248258423517096,
    -0.00021617183011696337,
    -8.54830546758407e-06,
    6.982008370808328e-05,
    -1.3397168632939717e-05,
    -1.6361524787254266e-05,
    7.252145535890469e-06,
    2.3275490984936866e-06,
    -2.1872676769961665e-06,
    1.0994743385262033e-08,
    4.2616623260115723e-07,
    -1.0004146823545009e-07,
    -4.7643799651394533e-08,
    2.6054427549776254e-08,
    5.553397861397054e-10,
    -3.331105680467578e-09,
    6.984862691832183e-10,
    1.6136229782709042e-10,
    -9.461387997276803e-11,
    1.0001051313931712e-11,
    3.239428638532286e-12,
    -1.1852375921015822e-12,
    1.54399757084762e-13,
    -7.737942630954405e-15,
];

const DB31: [f64; 62] = [
    1.648013386456141e-05,
    0.0003394122037769957,
    0.0032368840686277213,
    0.018853691612985914,
    0.07433609301164788,
    0.20701287448523534,
    0.40919220003742784,
    0.5511398409142755,
    0.4294688082061373,
    0.027169212497369463,
    -0.3109551183195075,
    -0.21797848552356336,
    0.14017828876527327,
    0.2249667114737371,
    -0.04992634916046824,
    -0.18696236089571544,
    0.015436988429488934,
    0.1450895009319932,
    -0.008139832273469236,
    -0.10761277332349563,
    0.01094129745236497,
    0.07535361174328141,
    -0.014880026618104822,
    -0.04861907546485433,
    0.016154171565985913,
    0.02804761936675617,
    -0.01427627527776352,
    -0.01390055293926653,
    0.010517639487371841,
    0.005516163573310993,
    -0.006520852375874612,
    -0.00142826422321891,
    0.0033930667767159317,
    -6.397901106014601e-05,
    -0.001459041741985161,
    0.00034313982969047345,
    0.0004998816175637223,
    -0.00023965834694029495,
    -0.00012434116172502287,
    0.00010895843504167668,
    1.501335727444533e-05,
    -3.631255157860086e-05,
    4.034520235184279e-06,
    8.795301342692988e-06,
    -3.0351423658915096e-06,
    -1.3690602309429407e-06,
    9.810015422044372e-07,
    5.327250656974915e-08,
    -1.9759251291702062e-07,
    3.6168265173310047e-08,
    2.3283097138214097e-08,
    -1.0615296021502523e-08,
    -6.474311687959861e-10,
    1.4085681510251775e-09,
    -2.524043954153353e-10,
    -7.348930032486264e-11,
    3.6921088088711296e-11,
    -3.32700896712598e-12,
    -1.324334917243963e-12,
    4.4454670962919323e-13,
    -5.5594420505790146e-14,
    2.6993828797626656e-15,
];

const DB32: [f64; 64] = [
    1.1614633021350149e-05,
    0.00024665669063809033,
    0.002431261919572266,
    0.014681046381419136,
    0.06025749912033537,
    0.1757507836394389,
    0.36750962859734965,
    0.5343179193409539,
    0.4778091637339484,
    0.12063053826561783,
    -0.26669818147667557,
    -0.2774215815584272,
    0.06471335480551624,
    0.24831064235688016,
    0.024662444839697404,
    -0.1921023447085469,
    -0.04899511718467174,
    0.14523207947528666,
    0.04440490819993974,
    -0.10945611311608938,
    -0.029627872508447704,
    0.08087414063848396,
    0.014106151516106608,
    -0.05692631406247844,
    -0.0023802644649325738,
    0.03705145792354468,
    -0.004145907660827218,
    -0.021662822836391194,
    0.006167527310685675,
    0.011017400715406881,
    -0.005411568257275791,
    -0.004649216751184412,
    0.003627224640687865,
    0.0014689551004684678,
    -0.0019647405558217783,
    -0.0002211678729579098,
    0.0008673058518450555,
    -0.00010245373106073962,
    -0.0003059654423826912,
    0.00010539154617398281,
    8.103678329134838e-05,
    -5.259809282684323e-05,
    -1.2940457794055127e-05,
    1.8242684019806914e-05,
    -6.361781532260255e-07,
    -4.558309576264423e-06,
    1.202889036321621e-06,
    7.560047625595948e-07,
    -4.285970693151457e-07,
    -5.00336186874823e-08,
    8.965966311957729e-08,
    -1.2199243594833731e-08,
    -1.104383021722649e-08,
    4.250422311980593e-09,
    4.3843877999404743e-10,
    -5.881091462634606e-10,
    8.904723796221606e-11,
    3.263270741332908e-11,
    -1.4309187651692024e-11,
    1.0756106535010622e-12,
    5.361482229611802e-13,
    -1.6638004894334023e-13,
    2.000715303810525e-14,
    -9.421019139535079e-16,
];

const DB33: [f64; 66] = [
    8.186358314175091e-06,
    0.00017910161537027915,
    0.0018227094351640843,
    0.01139594337458161,
    0.04861466653171619,
    0.14818631318005282,
    0.32671813011770756,
    0.5093761725149396,
    0.5112547705832675,
    0.20958235071305542,
    -0.20420262239854212,
    -0.31599741076656024,
    -0.01927833943695276,
    0.24542061211927912,
    0.09985155868033815,
    -0.17142809905185932,
    -0.11084413311671079,
    0.12196785640373461,
    0.09478808805061596,
    -0.09114696835133149,
    -0.07030248505405616,
    0.07019114394099653,
    0.04573456189389668,
    -0.05347125133582229,
    -0.025248582977476498,
    0.038687060760244966,
    0.010703265820019549,
    -0.025728761754732973,
    -0.002167758617353607,
    0.015316954115857666,
    -0.0015942887824146048,
    -0.00795354038705794,
    0.0023890624081659086,
    0.003480800953405712,
    -0.001860718214455796,
    -0.001204309257604659,
    0.0010743806963512913,
    0.0002727305847336937,
    -0.0004908329007590351,
    4.3931662517661856e-06,
    0.00017804318982512455,
    -4.1604385162737096e-05,
    -4.9295644234173015e-05,
    2.4233353988168903e-05,
    9.070805757828453e-06,
    -8.866121366757737e-06,
    -3.607516102879772e-07,
    2.2883712761415273e-06,
    -4.4269234079528704e-07,
    -3.985791291985944e-07,
    1.8224433325710535e-07,
    3.377972703730854e-08,
    -3.9878381985188806e-08,
    3.6728635768381814e-09,
    5.111211857347454e-09,
    -1.6713926772519324e-09,
    -2.496402105246194e-10,
    2.426833102305682e-10,
    -3.0495744539458635e-11,
    -1.4202368598899367e-11,
    5.509414720765525e-12,
    -3.343481218953279e-13,
    -2.1524883868333026e-13,
    6.214740247174398e-14,
    -7.196510545363322e-15,
    3.289373678416306e-16,
];

const DB34: [f64; 68] = [
    5.770510632730285e-06,
    0.000129947620067953,
    0.00136406139005905,
    0.008819889403884978,
    0.03904884135178594,
    0.1241524821113768,
    0.28776505923371454,
    0.47847874627937104,
    0.5305550996564632,
    0.290366329507275,
    -0.12824684217443716,
    -0.33152530150838694,
    -0.10389191551564048,
    0.21690722018742759,
    0.16660175041220746,
    -0.12733735822380116,
    -0.1609249271778668,
    0.07799184693794811,
    0.13412596027113613,
    -0.05448296806413905,
    -0.10294759699281408,
    0.043576094649631296,
    0.0731852354367956,
    -0.03701283841786245,
    -0.04743855964527776,
    0.030739746573959344,
    0.027228350756354196,
    -0.023671737922826366,
    -0.013143980016657161,
    0.01640937419986519,
    0.00471364926099981,
    -0.01004550670836152,
    -0.0006194748845153873,
    0.005334950768759936,
    -0.0007692127975067837,
    -0.002399453943537056,
    0.0008589959874363662,
    0.0008751999064078689,
    -0.0005527355762144198,
    -0.00023267321402335316,
    0.00026507723975580577,
    2.660050018453442e-05,
    -9.914697770780135e-05,
    1.3531172272496496e-05,
    2.8449514196978075e-05,
    -1.0576574942579506e-05,
    -5.710826510998304e-06,
    4.169871758547028e-06,
    4.979718101421308e-07,
    -1.1163065348170084e-06,
    1.448195708333185e-07,
    2.0259906666678593e-07,
    -7.52670174041259e-08,
    -1.990346501531737e-08,
    1.740423332936068e-08,
    -8.665744261368722e-10,
    -2.316501946995483e-09,
    6.446378210323402e-10,
    1.3004103186094153e-10,
    -9.90477453763241e-11,
    1.0042087354617698e-11,
    6.0801253540001675e-12,
    -2.1078791089153017e-12,
    9.799451158211598e-14,
    8.579194051799733e-14,
    -2.3170837039064084e-14,
    2.5873383819356996e-15,
    -1.14894475448059e-16,
];

const DB35: [f64; 70] = [
    4.067934061148559e-06,
    9.42146947557674e-05,
    0.0010191226803750982,
    0.006807292884319132,
    0.031236288511490715,
    0.10340445586147838,
    0.2513073789944933,
    0.4435927392240354,
    0.5370084275091661,
    0.36034564051804735,
    -0.04388388187393404,
    -0.32382286491211615,
    -0.18178697676672784,
    0.16604135749078092,
    0.2172992893210893,
    -0.06526287131067754,
    -0.19191958929859396,
    0.01930954466601835,
    0.1552924803962371,
    -0.004752680834111351,
    -0.12058552264339356,
    0.004734229172641949,
    0.08991354757072954,
    -0.009318558949903924,
    -0.06335603744044346,
    0.013228549585036555,
    0.04125469306470509,
    -0.014366839784220072,
    -0.024169497801660268,
    0.012766456715656745,
    0.012289436008118711,
    -0.00957779789923571,
    -0.00508599164923343,
    0.006137754586740521,
    0.0014280887940707622,
    -0.0033576443809223834,
    7.615969435172737e-06,
    0.001549637469702363,
    -0.0003346692164250855,
    -0.0005864810318991818,
    0.0002648328819961289,
    0.0001700012283661249,
    -0.00013658830722611617,
    -2.9769959628485097e-05,
    5.30414312291331e-05,
    -2.43700152682779e-06,
    -1.5724420772702817e-05,
    4.308047861716731e-06,
    3.35334586287131e-06,
    -1.8959296176931532e-06,
    -3.9039317332873064e-07,
    5.302368616904761e-07,
    -3.700308378205125e-08,
    -9.990396944534901e-08,
    3.008188650719067e-08,
    1.0849027337899348e-08,
    -7.458116552893037e-09,
    5.897951310384362e-11,
    1.0308233454854333e-09,
    -2.433545573751673e-10,
    -6.407938256501889e-11,
    4.0005366272537445e-11,
    -3.1256393571085576e-12,
    -2.5670654761550815e-12,
    8.015088533687901e-13,
    -2.5979543288938482e-14,
    -3.3977208567962675e-14,
    8.624037434720089e-15,
    -9.298012529324185e-16,
    4.0146287123334886e-17,
];

const DB36: [f64; 72] = [
    2.867925182755946e-06,
    6.826028678546358e-05,
    0.0007602151099668488,
    0.005240297377409884,
    0.024890565644827965,
    0.08565209259526409,
    0.2177569530979008,
    0.4064336977082553,
    0.5322668952607287,
    0.4178753356009698,
    0.04397519752934863,
    -0.2944210395891146,
    -0.24680703697812553,
    0.09811420416311477,
    0.2465372776089742,
    0.007278515095792229,
    -0.19933720560864962,
    -0.045861400746392715,
    0.1541062366276429,
    0.05027618007353843,
    -0.11880375431013564,
    -0.03988085357551317,
    0.09115678225801654,
    0.02503872144956849,
    -0.06820901663681751,
    -0.011319100316817429,
    0.04851308354780909,
    0.0014249726617653917,
    -0.0319807206776397,
    0.003984040198717005,
    0.01906359478062536,
    -0.005657813245058818,
    -0.009990263473281372,
    0.005022989106665829,
    0.004413484835350576,
    -0.0034845414454048834,
    -0.0015030740662966438,
    0.0019907937718517373,
    0.0002776812795712026,
    -0.0009463403823261102,
    8.614565758992702e-05,
    0.00036935072849675105,
    -0.00011551188958435271,
    -0.00011318994680846657,
    6.69474119693059e-05,
    2.3751066836608608e-05,
    -2.7313908246543378e-05,
    -1.183471059985616e-06,
    8.372218198160788e-06,
    -1.5861457824345775e-06,
    -1.8708116028591808e-06,
    8.311421279707779e-07,
    2.5484235225565776e-07,
    -2.4553776584342327e-07,
    2.753249073339512e-09,
    4.799043465450992e-08,
    -1.1560936888170085e-08,
    -5.612784343327791e-09,
    3.138841695782424e-09,
    1.0908155537137518e-10,
    -4.5125457785632494e-10,
    8.962418203859612e-11,
    3.037429098112535e-11,
    -1.599716689261357e-11,
    8.876846287217375e-13,
    1.070969357114017e-12,
    -3.029285026974877e-13,
    5.542263182639804e-15,
    1.3380713862991059e-14,
    -3.2046285434017497e-15,
    3.339971984818693e-16,
    -1.4032741753731907e-17,
];

const DB37: [f64; 74] = [
    2.0220608624983923e-06,
    4.942343750628132e-05,
    0.0005662418377066724,
    0.0040241403682572865,
    0.01976228615387959,
    0.0705848259771816,
    0.18732633186206493,
    0.36844097240030615,
    0.5181670408556229,
    0.4622075536616057,
    0.13087896323302017,
    -0.24618042976108342,
    -0.29437591526266177,
    0.01967150045235939,
    0.2515232543602687,
    0.08180602838721862,
    -0.181962291778608,
    -0.10845171382330178,
    0.12992964695985376,
    0.10178029683881418,
    -0.09660754061668439,
    -0.08233021190655741,
    0.07504761994836018,
    0.059567410871529954,
    -0.05925681563265897,
    -0.03825382947938425,
    0.045807944151268334,
    0.020972800592597547,
    -0.03352358406410097,
    -0.008833493890410233,
    0.022618651544599473,
    0.0016904723834844238,
    -0.013763981962894785,
    0.0015193057788333991,
    0.007387757452855584,
    -0.0022480531870038246,
    -0.0033945232764083988,
    0.0018168713438014236,
    0.0012639342581174772,
    -0.0011114848653186302,
    -0.00032807884708801983,
    0.0005490532773373631,
    1.5344390231955034e-05,
    -0.00022089440324554938,
    4.336726125945695e-05,
    7.055138782065466e-05,
    -3.09866292761993e-05,
    -1.6391624961605832e-05,
    1.3543277184167817e-05,
    1.8499450031155903e-06,
    -4.3099415565970926e-06,
    4.854731396996412e-07,
    1.0021213992971776e-06,
    -3.494948603445728e-07,
    -1.5098853886715837e-07,
    1.1090312322164394e-07,
    5.3506575154614344e-09,
    -2.2521938367248057e-08,
    4.224485706362419e-09,
    2.793974465953983e-09,
    -1.297205001469435e-09,
    -1.031411129096975e-10,
    1.946164894082315e-10,
    -3.203398244123242e-11,
    -1.3984157155376414e-11,
    6.3349554409739135e-12,
    -2.0963631942348006e-13,
    -4.4216124098721056e-13,
    1.1380528309214397e-13,
    -4.518889607463727e-16,
    -5.243025691884206e-15,
    1.1890123875082528e-15,
    -1.1992803358528796e-16,
    4.9066150649352034e-18,
];

const DB38: [f64; 76] = [
    1.4257766416741318e-06,
    3.576251994264023e-05,
    0.00042117026647271163,
    0.0030830881192537517,
    0.015637249347572157,
    0.057889943612859256,
    0.1600719935641107,
    0.33077578141101466,
    0.4965911753117181,
    0.4933560785171008,
    0.2130505713555785,
    -0.1828676677083359,
    -0.3216756378089979,
    -0.06226650604782432,
    0.2321259638353531,
    0.14998511961871702,
    -0.1417956859730596,
    -0.15991256515824437,
    0.08563812155615105,
    0.14141473407338268,
    -0.05658645863072738,
    -0.11473117071074437,
    0.04309589543304764,
    0.08720439826203975,
    -0.036605103402874296,
    -0.06176620870841316,
    0.03198987753153781,
    0.04005498110511595,
    -0.026891493880894516,
    -0.023114134020549317,
    0.020904645255655243,
    0.011290497278685965,
    -0.014701882065398682,
    -0.004131306656031089,
    0.00921478503219718,
    0.0005625715748403532,
    -0.005071314509218348,
    0.0007169821821064019,
    0.0024006977818909732,
    -0.0008448626665537775,
    -0.0009424614077227377,
    0.0005810759750532864,
    0.00028176392503806707,
    -0.0003031020460726612,
    -4.55568269666842e-05,
    0.00012620433501661708,
    -1.1554091038337172e-05,
    -4.175141648540398e-05,
    1.3341761499213504e-05,
    1.0373591840455998e-05,
    -6.456730428469619e-06,
    -1.5508443501186026e-06,
    2.1499602699396653e-06,
    -8.487087586072593e-08,
    -5.187733738874145e-07,
    1.3963775455083553e-07,
    8.400351046895966e-08,
    -4.8847579374592866e-08,
    -5.424274800287298e-09,
    1.0347045392748585e-08,
    -1.4363294877951358e-09,
    -1.3491977539834489e-09,
    5.261132557357599e-10,
    6.732336490189309e-11,
    -8.278256522538134e-11,
    1.1016929345994545e-11,
    6.291537317039508e-12,
    -2.4847892375636427e-12,
    2.626496504065252e-14,
    1.8086612362745306e-13,
    -4.249817819571463e-14,
    -4.563397162127374e-16,
    2.0450996767889887e-15,
    -4.405307042483461e-16,
    4.3045968395587903e-17,
    -1.7161524510887442e-18,
];

const SYM4: [f64; 8] = [
    0.032223100604051466,
    -0.012603967262031304,
    -0.09921954357663353,
    0.29785779560530606,
    0.8037387518051321,
    0.497618667632775,
    -0.029635527646002493,
    -0.07576571478950221,
];

const SYM5: [f64; 10] = [
    0.019538882735249827,
    -0.021101834024689042,
    -0.17532808990805623,
    0.01660210576451085,
    0.633978963456792,
    0.7234076904040407,
    0.19939753397685558,
    -0.039134249302313844,
    0.02951949092570626,
    0.027333068344998768,
];

const SYM6: [f64; 12] = [
    -0.00780070832503238,
    0.0017677118642540077,
    0.04472490177078139,
    -0.02106029251237085,
    -0.07263752278637658,
    0.3379294217281658,
    0.787641141028651,
    0.49105594192797375,
    -0.04831174258569806,
    -0.11799011114852002,
    0.0034907120842221626,
    0.015404109327044824,
];

const SYM7: [f64; 14] = [
    0.010268176708464817,
    0.0040102448715223955,
    -0.10780823770328972,
    -0.14004724044293365,
    0.2886296317506479,
    0.7677643170048829,
    0.5361019170905692,
    0.017441255086835708,
    -0.04955283493704283,
    0.06789269350122057,
    0.030515513165877885,
    -0.012636303403240567,
    -0.001047384888679738,
    0.002681814568260147,
];

const SYM8: [f64; 16] = [
    0.001889950332767689,
    -0.0003029205147241331,
    -0.014952258337062199,
    0.0038087520138944896,
    0.04913717967373029,
    -0.027219029917103486,
    -0.0519458381078818,
    0.36444189483617895,
    0.777185751699628,
    0.4813596512590534,
    -0.061273359067811076,
    -0.14329423835127267,
    0.007607487324976609,
    0.03169508781152599,
    -0.0005421323318000107,
    -0.0033824159510050028,
];

const SYM9: [f64; 18] = [
    0.001069490032908612,
    -0.00047315449868004354,
    -0.010264064027633121,
    0.008859267493400267,
    0.062077789302885746,
    -0.018233770779395506,
    -0.19155083129728434,
    0.03527248803527104,
    0.6173384491409342,
    0.7178970827644124,
    0.23876091460730517,
    -0.05456895843083335,
    0.0005834627461249819,
    0.030224878858275187,
    -0.011528210207679187,
    -0.013271967781817134,
    0.0006197808889855071,
    0.0014009155259146562,
];

const SYM10: [f64; 20] = [
    -0.0004101159158043983,
    0.00034014926631480987,
    0.005071649198531799,
    -0.0011404297952173285,
    -0.02300546135349751,
    -0.0008687521096892581,
    0.03384235466357522,
    -0.0670899078083818,
    -0.08787871151197514,
    0.34021601302346216,
    0.7669548365606096,
    0.5137098733480263,
    -0.015019238839137859,
    -0.12155210554854895,
    0.026240365058448987,
    0.04968612664694288,
    0.0005956827837425191,
    -0.007056764062587304,
    0.0007154205420543397,
    0.0008625782262259724,
];

const SYM11: [f64; 22] = [
    0.00014750986910037436,
    -0.0001285193778706456,
    -0.0015948440850143489,
    0.0018159127773339032,
    0.008864269595098744,
    -0.008084071064789203,
    -0.02379875805857424,
    0.033211133002265796,
    0.046881473835499024,
    -0.08483533635977675,
    0.009970828986636891,
    0.51905339414099,
    0.7619116588766439,
    0.3334375981441171,
    -0.11660996765137485,
    -0.11057583868964391,
    0.028260865505261516,
    0.02927254411647106,
    -0.007422499594650264,
    -0.00662960621719275,
    0.0004962439079207184,
    0.0005695707146428912,
];

const SYM12: [f64; 24] = [
    9.767610247723154e-05,
    -8.418262000974747e-05,
    -0.001386550262370246,
    0.0006610376737514791,
    0.00863423079172048,
    -0.0005948327807239624,
    -0.025493025089340912,
    0.0018619254598864197,
    0.030686743515091555,
    -0.08017578174217259,
    -0.08927100096836146,
    0.34345150160951965,
    0.7608721850415805,
    0.5166743899411825,
    -0.007517992473075242,
    -0.12359121292129573,
    0.031256859883591684,
    0.06005859623424475,
    -0.001287033317152989,
    -0.013053840998593582,
    0.0006915974586788278,
    0.002104447335629671,
    -0.00017690949629193344,
    -0.00020526600487137938,
];

const SYM13: [f64; 26] = [
    7.042986690696273e-05,
    3.690537342323894e-05,
    -0.0007213643851363755,
    0.0004132611988416782,
    0.005674853760123338,
    -0.0014924472742587286,
    -0.020749686325520652,
    0.017618296880645045,
    0.09292603089914397,
    0.008819757670429852,
    -0.14049009311367552,
    0.11023022302128688,
    0.6445643839011571,
    0.6957391505615691,
    0.19770481877126597,
    -0.12436246075150338,
    -0.059750627717956466,
    0.01386249743583841,
    -0.017211642726304387,
    -0.020216768133395468,
    0.005296359738721862,
    0.00752622538996817,
    -0.00017094285852957213,
    -0.001136063438927969,
    -3.573862364871594e-05,
    6.820325263074355e-05,
];

const SYM14: [f64; 28] = [
    -2.3630560035158373e-05,
    1.946123955648847e-05,
    0.00037467186621825617,
    -0.00022737470733015942,
    -0.002783535422955635,
    0.0007970566239164852,
    0.011729309261388722,
    -0.0001330835589800499,
    -0.02622180812101198,
    0.005838521955027694,
    0.0292341274083238,
    -0.08843910772317169,
    -0.08733774970681711,
    0.3483543508884237,
    0.7565322361167204,
    0.5167105352637036,
    -0.004216040297268032,
    -0.12692108492556942,
    0.033339229883137034,
    0.06709867559977023,
    -0.0039053310774013724,
    -0.019351534256228764,
    0.0006852905596424015,
    0.003928482068575019,
    -0.0003402317924311618,
    -0.0006169819105608121,
    4.024306903743931e-05,
    4.886462941519962e-05,
];

const SYM15: [f64; 30] = [
    9.306719798100622e-06,
    -5.790262212021564e-06,
    -0.00013677419581147214,
    0.00010479871796071892,
    0.0009505103425112589,
    -0.0009068548112987857,
    -0.004423608764929712,
    0.0038506685377816077,
    0.013096583178791046,
    -0.012679281734782819,
    -0.025915075749636175,
    0.03943853356276349,
    0.04629430191933009,
    -0.06867135578794178,
    0.058227061512702516,
    0.5442980009596347,
    0.7433238591098217,
    0.3035811907697099,
    -0.15320875068577056,
    -0.13641572400946825,
    0.03968503222838833,
    0.04603932747219319,
    -0.013752034810389698,
    -0.014611347258536819,
    0.0033000315657032956,
    0.003535204026870872,
    -0.0003622700247119798,
    -0.0004804990866013334,
    1.86088407507606e-05,
    2.9910090474873358e-05,
];

const SYM16: [f64; 32] = [
    6.013046935383735e-06,
    -3.0299529097086654e-06,
    -0.00010010246690380868,
    5.923092771942335e-05,
    0.0008456478748190577,
    -0.00032295887612576724,
    -0.00425661180452411,
    0.0008436201956487222,
    0.014154682982070297,
    0.00026490156065520884,
    -0.025068138806987435,
    0.012706563679227527,
    0.03507162508153722,
    -0.08054402348170223,
    -0.06509122941644582,
    0.3692021334882973,
    0.755252926204922,
    0.5025586502786632,
    -0.021710752223404375,
    -0.1449792482185043,
    0.026587674324202552,
    0.06878654953928716,
    -0.008709524450471136,
    -0.026604749178127374,
    0.0004614414698097797,
    0.006234369141106936,
    -0.00043911813432196697,
    -0.0012656873429159057,
    0.00010788489177614944,
    0.00018164701574604282,
    -5.637386466314999e-06,
    -1.1187589518712514e-05,
];

const SYM17: [f64; 34] = [
    4.297343327338256e-06,
    2.780126693825943e-06,
    -6.293702597545909e-05,
    -1.3506383399799107e-05,
    0.00047599638026318304,
    -0.00013864230268101327,
    -0.0027416759756781813,
    0.0008567700701928022,
    0.010482366933016147,
    -0.004819212803181354,
    -0.03329138349230622,
    0.01790395221438949,
    0.10475461484219489,
    0.01727117821060019,
    -0.11856693261099856,
    0.1423983504151139,
    0.6507166292043823,
    0.681488995344317,
    0.18053958458074407,
    -0.1550760053497069,
    -0.08607087472063264,
    0.01615880872591857,
    -0.007261634750933915,
    -0.01803889724190139,
    0.009952982523507613,
    0.012396988366634302,
    -0.0019054076898564055,
    -0.003932325279794941,
    5.840042869518092e-05,
    0.0007198270642145453,
    2.5207933140671322e-05,
    -7.607124405602918e-05,
    -2.4527163425740825e-06,
    3.7912531943316247e-06,
];

const SYM18: [f64; 36] = [
    -1.4954214196366613e-06,
    5.580559836030906e-07,
    2.722315455907705e-05,
    -1.4269834148270929e-05,
    -0.0002512490231047237,
    0.0001140359113540192,
    0.0014676788149342573,
    -0.0004335957143386668,
    -0.005826150016851343,
    0.0007653391058130103,
    0.01594392935977962,
    4.8728600254655075e-05,
    -0.024391628259886052,
    0.017586684387315026,
    0.03711928705911587,
    -0.079309880642344,
    -0.054146130369335244,
    0.37997045090886045,
    0.7529390509061876,
    0.4954223805669615,
    -0.028805174672325323,
    -0.15389248699756267,
    0.023871024664935035,
    0.07163268954564427,
    -0.011600772619288326,
    -0.0321011760603166,
    0.001026422484911952,
    0.009063243716386544,
    -0.0004330803742287105,
    -0.0021079563928470143,
    0.00019265059747963323,
    0.000409032774056631,
    -2.579162471728925e-05,
    -4.96403355934034e-05,
    9.865258010713304e-07,
    2.643591068446548e-06,
];

const SYM19: [f64; 38] = [
    5.158601204495161e-07,
    -7.905549451720903e-07,
    -1.1584131889603046e-05,
    1.1354691995909786e-05,
    0.00011764550918019295,
    -5.7323326969762626e-05,
    -0.0006614263731921712,
    0.00015084082072056785,
    0.002132142339072613,
    -0.0011548501279503266,
    -0.004907248455193186,
    0.00879860663081664,
    0.017016039487952384,
    -0.02227971744916765,
    -0.04870208069588434,
    0.00013916918586315752,
    -0.0066628699539766495,
    -0.09336452867606063,
    0.08095551917215292,
    0.5637517121130851,
    0.7290353803819039,
    0.28501077735446095,
    -0.15000710007470325,
    -0.10141045299577056,
    0.09847727311750058,
    0.08623824057542392,
    -0.014254565757115803,
    -0.025663050885956495,
    0.004989731350901064,
    0.008291333742682965,
    -0.0005651956304600315,
    -0.001607279776808841,
    0.00016949633697465293,
    0.0002775313354709399,
    -1.774580683294656e-05,
    -2.6654121257404013e-05,
    2.8545100367819934e-06,
    1.8626509142614587e-06,
];

const SYM20: [f64; 40] = [
    3.568303312063163e-07,
    -1.7427669914175627e-07,
    -7.318161806558765e-06,
    4.23769594003165e-06,
    7.471321283769674e-05,
    -3.904233026366182e-05,
    -0.000486237659571832,
    0.0002038544695795666,
    0.002255790040085024,
    -0.0005345257528622996,
    -0.0074455886254710425,
    0.000638857565696525,
    0.017390913480343193,
    -0.0004186180686091373,
    -0.024036009147291933,
    0.020263179527481707,
    0.03286703783210097,
    -0.09180946005430764,
    -0.06433393919587761,
    0.3733315052392887,
    0.749751433856219,
    0.50358565728662,
    -0.014843410195151265,
    -0.14675166926523278,
    0.027645223501986574,
    0.07578496533363062,
    -0.013001796304550046,
    -0.03625404599314903,
    0.0016841736588731164,
    0.011664664510385492,
    -0.0006161629473444505,
    -0.003170151430939914,
    0.0002646107706270735,
    0.000717539361711599,
    -6.44266803764057e-05,
    -0.00012268324067967118,
    7.7370586831277e-06,
    1.3346089489609134e-05,
    -3.201380982822987e-07,
    -6.554805329937677e-07,
];

const COIF1: [f64; 6] = [
    -0.015655728135791993,
    -0.07273261951252645,
    0.3848648468648577,
    0.8525720202116004,
    0.33789766245748176,
    -0.07273261951252645,
];

const COIF2: [f64; 12] = [
    -0.000720549445520347,
    -0.001823208870911032,
    0.005611434819368834,
    0.02368017194684777,
    -0.059434418646431085,
    -0.07648859907828076,
    0.41700518442323903,
    0.8127236354494135,
    0.38611006682276283,
    -0.0673725547237256,
    -0.04146493678687178,
    0.01638733646320364,
];

const COIF3: [f64; 18] = [
    -3.4599773197272774e-05,
    -7.0983302506379e-05,
    0.0004662169598204029,
    0.0011175187708306303,
    -0.002574517688136797,
    -0.009007976136730624,
    0.015880544863669452,
    0.03455502757329773,
    -0.08230192710629981,
    -0.07179982161915484,
    0.42848347637737,
    0.7937772226260872,
    0.4051769024091182,
    -0.06112339000297254,
    -0.06577191128146936,
    0.023452696142077165,
    0.0077825964256727454,
    -0.0037935128643808015,
];

const COIF4: [f64; 24] = [
    -1.7849909144933466e-06,
    -3.2596479400307506e-06,
    3.1229861599195265e-05,
    6.233885431278718e-05,
    -0.0002599743371222568,
    -0.0005890202246332164,
    0.0012665610789256603,
    0.003751434697146086,
    -0.0056582838001308835,
    -0.015211728187697211,
    0.025082253337949608,
    0.03933442260558915,
    -0.09622042453595264,
    -0.06662747236681715,
    0.43438603311435653,
    0.7822389344242826,
    0.41530842700068227,
    -0.05607731960356926,
    -0.08126671024919373,
    0.026682304669604834,
    0.016068947131575025,
    -0.00734616793626805,
    -0.0016294924252267858,
    0.000892313902537003,
];

const COIF5: [f64; 30] = [
    -9.604010112734563e-08,
    -1.6237995171992764e-07,
    2.0612203985734052e-06,
    3.7007277113294817e-06,
    -2.127022167247349e-05,
    -4.121986192417729e-05,
    0.00014035632812353066,
    0.00030185794166771624,
    -0.0006375589261251518,
    -0.0016616273039269682,
    0.002431575442534298,
    0.0067615202206098455,
    -0.009159507338657244,
    -0.019758391600942636,
    0.03267479946700057,
    0.041287530472090474,
    -0.10556315130722742,
    -0.06203775157497129,
    0.4379823066590209,
    0.7742936228603463,
    0.42157126673088047,
    -0.052046670253590534,
    -0.09192158806016174,
    0.028169744270561837,
    0.02340832211895729,
    -0.010131584846914092,
    -0.0041593126275854125,
    0.002178294377849276,
    0.00035857774116245363,
    -0.00021208186206789543,
];

const BIOR1_3_DEC: [f64; 6] = [
    -0.08838834764831845,
    0.08838834764831845,
    0.7071067811865476,
    0.7071067811865476,
    0.08838834764831845,
    -0.08838834764831845,
];

const BIOR1_3_REC: [f64; 6] = [
    0.0,
    0.0,
    0.7071067811865476,
    0.7071067811865476,
    0.0,
    0.0,
];

const BIOR1_5_DEC: [f64; 10] = [
    0.016572815184059706,
    -0.016572815184059706,
    -0.12153397801643785,
    0.12153397801643785,
    0.7071067811865476,
    0.7071067811865476,
    0.12153397801643785,
    -0.12153397801643785,
    -0.016572815184059706,
    0.016572815184059706,
];

const BIOR1_5_REC: [f64; 10] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.7071067811865476,
    0.7071067811865476,
    0.0,
    0.0,
    0.0,
    0.0,
];

const BIOR2_2_DEC: [f64; 6] = [
    -0.1767766952966369,
    0.3535533905932738,
    1.0606601717798212,
    0.3535533905932738,
    -0.1767766952966369,
    0.0,
];

const BIOR2_2_REC: [f64; 6] = [
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
];

const BIOR2_4_DEC: [f64; 10] = [
    0.03314563036811941,
    -0.06629126073623882,
    -0.1767766952966369,
    0.4198446513295126,
    0.9943689110435825,
    0.4198446513295126,
    -0.1767766952966369,
    -0.06629126073623882,
    0.03314563036811941,
    0.0,
];

const BIOR2_4_REC: [f64; 10] = [
    0.0,
    0.0,
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
    0.0,
    0.0,
];

const BIOR2_6_DEC: [f64; 14] = [
    -0.006905339660024878,
    0.013810679320049757,
    0.04695630968816917,
    -0.1077232986963881,
    -0.16987135563661201,
    0.4474660099696121,
    0.966747552403483,
    0.4474660099696121,
    -0.16987135563661201,
    -0.1077232986963881,
    0.04695630968816917,
    0.013810679320049757,
    -0.006905339660024878,
    0.0,
];

const BIOR2_6_REC: [f64; 14] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

const BIOR2_8_DEC: [f64; 18] = [
    0.0015105430506304422,
    -0.0030210861012608843,
    -0.012947511862546647,
    0.02891610982635418,
    0.05299848189069094,
    -0.13491307360773605,
    -0.16382918343409023,
    0.46257144047591653,
    0.9516421218971786,
    0.46257144047591653,
    -0.16382918343409023,
    -0.13491307360773605,
    0.05299848189069094,
    0.02891610982635418,
    -0.012947511862546647,
    -0.0030210861012608843,
    0.0015105430506304422,
    0.0,
];

const BIOR2_8_REC: [f64; 18] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

const BIOR3_1_DEC: [f64; 4] = [
    -0.3535533905932738,
    1.0606601717798212,
    1.0606601717798212,
    -0.3535533905932738,
];

const BIOR3_1_REC: [f64; 4] = [
    0.1767766952966369,
    0.5303300858899106,
    0.5303300858899106,
    0.1767766952966369,
];

const BIOR3_3_DEC: [f64; 8] = [
    0.06629126073623882,
    -0.1988737822087165,
    -0.15467960838455727,
    0.9943689110435825,
    0.9943689110435825,
    -0.15467960838455727,
    -0.1988737822087165,
    0.06629126073623882,
];

const BIOR3_3_REC: [f64; 8] = [
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899106,
    0.5303300858899106,
    0.1767766952966369,
    0.0,
    0.0,
];

const BIOR3_5_DEC: [f64; 12] = [
    -0.013810679320049757,
    0.04143203796014927,
    0.052480581416189075,
    -0.26792717880896527,
    -0.07181553246425873,
    0.966747552403483,
    0.966747552403483,
    -0.07181553246425873,
    -0.26792717880896527,
    0.052480581416189075,
    0.04143203796014927,
    -0.013810679320049757,
];

const BIOR3_5_REC: [f64; 12] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899106,
    0.5303300858899106,
    0.1767766952966369,
    0.0,
    0.0,
    0.0,
    0.0,
];

const BIOR3_7_DEC: [f64; 16] = [
    0.0030210861012608843,
    -0.009063258303782653,
    -0.01683176542131064,
    0.074663985074019,
    0.03133297870736289,
    -0.301159125922835,
    -0.02649924094534547,
    0.9516421218971786,
    0.9516421218971786,
    -0.02649924094534547,
    -0.301159125922835,
    0.03133297870736289,
    0.074663985074019,
    -0.01683176542131064,
    -0.009063258303782653,
    0.0030210861012608843,
];

const BIOR3_7_REC: [f64; 16] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899106,
    0.5303300858899106,
    0.1767766952966369,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

const BIOR3_9_DEC: [f64; 20] = [
    -0.0006797443727836989,
    0.002039233118351097,
    0.005060319219611981,
    -0.020618912641105536,
    -0.014112787930175844,
    0.09913478249423216,
    0.012300136269419315,
    -0.32019196836077857,
    0.0020500227115698858,
    0.9421257006782068,
    0.9421257006782068,
    0.0020500227115698858,
    -0.32019196836077857,
    0.012300136269419315,
    0.09913478249423216,
    -0.014112787930175844,
    -0.020618912641105536,
    0.005060319219611981,
    0.002039233118351097,
    -0.0006797443727836989,
];

const BIOR3_9_REC: [f64; 20] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899106,
    0.5303300858899106,
    0.1767766952966369,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

const BIOR4_4_DEC: [f64; 10] = [
    0.03782845550699546,
    -0.02384946501938,
    -0.1106244044184234,
    0.37740285561265374,
    0.8526986790094034,
    0.37740285561265374,
    -0.1106244044184234,
    -0.02384946501938,
    0.03782845550699546,
    0.0,
];

const BIOR4_4_REC: [f64; 10] = [
    0.0,
    -0.06453888262893843,
    -0.04068941760955844,
    0.4180922732222122,
    0.7884856164056644,
    0.4180922732222122,
    -0.04068941760955844,
    -0.06453888262893843,
    0.0,
    0.0,
];
