#![allow(clippy::excessive_precision)]

use crate::common::{codebook::Codebook, complex::Scaler};

// scalar quantisers for each LSP (Hz)
static LSP1: [Scaler; 16] = [
    225.0, 250.0, 275.0, 300.0, 325.0, 350.0, 375.0, 400.0, 425.0, 450.0, 475.0, 500.0,
    525.0, 550.0, 575.0, 600.0,
];
static LSP2: [Scaler; 16] = [
    325.0, 350.0, 375.0, 400.0, 425.0, 450.0, 475.0, 500.0, 525.0, 550.0, 575.0, 600.0,
    625.0, 650.0, 675.0, 700.0,
];
static LSP3: [Scaler; 16] = [
    500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0, 1000.0, 1050.0,
    1100.0, 1150.0, 1200.0, 1250.0,
];
static LSP4: [Scaler; 16] = [
    700.0, 800.0, 900.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0,
    1900.0, 2000.0, 2100.0, 2200.0,
];
static LSP5: [Scaler; 16] = [
    950.0, 1050.0, 1150.0, 1250.0, 1350.0, 1450.0, 1550.0, 1650.0, 1750.0, 1850.0, 1950.0, 2050.0,
    2150.0, 2250.0, 2350.0, 2450.0,
];
static LSP6: [Scaler; 16] = [
    1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0, 2000.0, 2100.0, 2200.0,
    2300.0, 2400.0, 2500.0, 2600.0,
];
static LSP7: [Scaler; 16] = [
    1500.0, 1600.0, 1700.0, 1800.0, 1900.0, 2000.0, 2100.0, 2200.0, 2300.0, 2400.0, 2500.0, 2600.0,
    2700.0, 2800.0, 2900.0, 3000.0,
];
static LSP8: [Scaler; 8] = [
    2300.0, 2400.0, 2500.0, 2600.0, 2700.0, 2800.0, 2900.0, 3000.0,
];
static LSP9: [Scaler; 8] = [
    2500.0, 2600.0, 2700.0, 2800.0, 2900.0, 3000.0, 3100.0, 3200.0,
];
static LSP10: [Scaler; 4] = [
    2900.0, 3100.0, 3300.0, 3500.0,
];

// scalar quantisers for the LSP differences 1..4 (Hz)
static DLSP1: [Scaler; 32] = [
    25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 275.0, 300.0,
    325.0, 350.0, 375.0, 400.0, 425.0, 450.0, 475.0, 500.0, 525.0, 550.0, 575.0, 600.0,
    625.0, 650.0, 675.0, 700.0, 725.0, 750.0, 775.0, 800.0,
];
static DLSP2: [Scaler; 32] = [
    25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 275.0, 300.0,
    325.0, 350.0, 375.0, 400.0, 425.0, 450.0, 475.0, 500.0, 525.0, 550.0, 575.0, 600.0,
    625.0, 650.0, 675.0, 700.0, 725.0, 750.0, 775.0, 800.0,
];
static DLSP3: [Scaler; 32] = [
    50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 550.0, 600.0,
    650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0, 1000.0, 1050.0, 1100.0, 1150.0, 1200.0,
    1250.0, 1300.0, 1350.0, 1400.0, 1450.0, 1500.0, 1550.0, 1600.0,
];
static DLSP4: [Scaler; 32] = [
    50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 550.0, 600.0,
    650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0, 1000.0, 1050.0, 1100.0, 1150.0, 1200.0,
    1250.0, 1300.0, 1350.0, 1400.0, 1450.0, 1500.0, 1550.0, 1600.0,
];

// JND spaced scalar quantisers for LSPs 1..4 (Hz)
static JND1: [Scaler; 32] = [
    150.0, 175.0, 200.0, 225.0, 250.0, 275.0, 300.0, 325.0, 350.0, 375.0, 400.0, 425.0,
    450.0, 475.0, 500.0, 525.0, 550.0, 575.0, 600.0, 625.0, 650.0, 675.0, 700.0, 725.0,
    750.0, 775.0, 800.0, 825.0, 850.0, 875.0, 900.0, 925.0,
];
static JND2: [Scaler; 32] = [
    300.0, 325.0, 350.0, 375.0, 400.0, 425.0, 450.0, 475.0, 500.0, 525.0, 550.0, 575.0,
    600.0, 625.0, 650.0, 675.0, 700.0, 725.0, 750.0, 775.0, 800.0, 825.0, 850.0, 875.0,
    900.0, 925.0, 950.0, 975.0, 1000.0, 1025.0, 1050.0, 1075.0,
];
static JND3: [Scaler; 32] = [
    400.0, 450.0, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0,
    1000.0, 1050.0, 1100.0, 1150.0, 1200.0, 1250.0, 1300.0, 1350.0, 1400.0, 1450.0, 1500.0, 1550.0,
    1600.0, 1650.0, 1700.0, 1750.0, 1800.0, 1850.0, 1900.0, 1950.0,
];
static JND4: [Scaler; 32] = [
    600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0, 1000.0, 1050.0, 1100.0, 1150.0,
    1200.0, 1250.0, 1300.0, 1350.0, 1400.0, 1450.0, 1500.0, 1550.0, 1600.0, 1650.0, 1700.0, 1750.0,
    1800.0, 1850.0, 1900.0, 1950.0, 2000.0, 2050.0, 2100.0, 2150.0,
];

// LSPs 5..10 (hz), 6 dimensional, JND spaced
static LSP_JND_VQ: [Scaler; 768] = [
    890.0, 1020.0, 1160.0, 1395.0, 2760.0, 3385.0,
    900.0, 1170.0, 1890.0, 2135.0, 2580.0, 3480.0,
    910.0, 1065.0, 1280.0, 1975.0, 2345.0, 3005.0,
    920.0, 1095.0, 1305.0, 1510.0, 1815.0, 3165.0,
    925.0, 1125.0, 1405.0, 2970.0, 3255.0, 3490.0,
    930.0, 1145.0, 1470.0, 1785.0, 3245.0, 3565.0,
    940.0, 1095.0, 1335.0, 1670.0, 2945.0, 3270.0,
    940.0, 1150.0, 1450.0, 2525.0, 3265.0, 3525.0,
    940.0, 1165.0, 1470.0, 2475.0, 2760.0, 3030.0,
    945.0, 1145.0, 1405.0, 2270.0, 2595.0, 3445.0,
    945.0, 1210.0, 2300.0, 2535.0, 2820.0, 3460.0,
    945.0, 1305.0, 2225.0, 2510.0, 3200.0, 3480.0,
    945.0, 2680.0, 2830.0, 3115.0, 3335.0, 3525.0,
    950.0, 1125.0, 1335.0, 1665.0, 2280.0, 3335.0,
    950.0, 1145.0, 1460.0, 2015.0, 2295.0, 3550.0,
    950.0, 1150.0, 1375.0, 2115.0, 2495.0, 2750.0,
    955.0, 1115.0, 1270.0, 1630.0, 1985.0, 2565.0,
    955.0, 1215.0, 1475.0, 2235.0, 2990.0, 3370.0,
    955.0, 1225.0, 2390.0, 2650.0, 2920.0, 3090.0,
    955.0, 1575.0, 2030.0, 2260.0, 2515.0, 3385.0,
    960.0, 1200.0, 1705.0, 2020.0, 2840.0, 3145.0,
    960.0, 2060.0, 2300.0, 2605.0, 3245.0, 3545.0,
    965.0, 1265.0, 1795.0, 2435.0, 3390.0, 3585.0,
    975.0, 2415.0, 2665.0, 2825.0, 3120.0, 3395.0,
    980.0, 1215.0, 2025.0, 2325.0, 2630.0, 3095.0,
    980.0, 1220.0, 1430.0, 1645.0, 2495.0, 2880.0,
    980.0, 1220.0, 2075.0, 2990.0, 3315.0, 3555.0,
    980.0, 1225.0, 1515.0, 2675.0, 2925.0, 3500.0,
    980.0, 1230.0, 1470.0, 1780.0, 2575.0, 3450.0,
    980.0, 1700.0, 1990.0, 2325.0, 2850.0, 3200.0,
    985.0, 1245.0, 1465.0, 1630.0, 1920.0, 2215.0,
    985.0, 1300.0, 1760.0, 2015.0, 2275.0, 2590.0,
    985.0, 1425.0, 1970.0, 2550.0, 2785.0, 3540.0,
    985.0, 2155.0, 2435.0, 2725.0, 3040.0, 3335.0,
    990.0, 1755.0, 1945.0, 2220.0, 3225.0, 3505.0,
    995.0, 1250.0, 1975.0, 2645.0, 2955.0, 3305.0,
    995.0, 1755.0, 2225.0, 2440.0, 2985.0, 3440.0,
    995.0, 2020.0, 2195.0, 2385.0, 2700.0, 3240.0,
    1005.0, 1560.0, 1855.0, 2505.0, 3005.0, 3480.0,
    1005.0, 1575.0, 2390.0, 2675.0, 2920.0, 3145.0,
    1005.0, 1980.0, 2390.0, 2670.0, 2845.0, 3115.0,
    1010.0, 1660.0, 2195.0, 3135.0, 3345.0, 3515.0,
    1015.0, 1300.0, 1965.0, 2205.0, 3225.0, 3530.0,
    1020.0, 1640.0, 2495.0, 2850.0, 3240.0, 3525.0,
    1025.0, 1335.0, 1530.0, 1850.0, 3015.0, 3330.0,
    1025.0, 1945.0, 2155.0, 2700.0, 2920.0, 3395.0,
    1030.0, 1265.0, 1515.0, 2080.0, 2575.0, 3110.0,
    1030.0, 1625.0, 2065.0, 2290.0, 2550.0, 2930.0,
    1030.0, 2095.0, 2640.0, 3050.0, 3295.0, 3540.0,
    1040.0, 1285.0, 1560.0, 1810.0, 2060.0, 2835.0,
    1040.0, 1585.0, 1860.0, 2750.0, 3185.0, 3410.0,
    1045.0, 1335.0, 1585.0, 2130.0, 3330.0, 3575.0,
    1045.0, 1370.0, 2775.0, 3050.0, 3265.0, 3495.0,
    1045.0, 1470.0, 1735.0, 2045.0, 2290.0, 3480.0,
    1045.0, 2040.0, 3005.0, 3215.0, 3370.0, 3540.0,
    1065.0, 1310.0, 1590.0, 2595.0, 2950.0, 3280.0,
    1065.0, 1590.0, 1845.0, 2185.0, 2860.0, 3540.0,
    1065.0, 1985.0, 2620.0, 2805.0, 3070.0, 3310.0,
    1070.0, 1400.0, 1745.0, 2225.0, 2560.0, 2780.0,
    1080.0, 1950.0, 2170.0, 2320.0, 2570.0, 3520.0,
    1085.0, 1335.0, 1545.0, 1795.0, 2115.0, 3405.0,
    1090.0, 1365.0, 2380.0, 2860.0, 3125.0, 3400.0,
    1090.0, 1390.0, 1915.0, 2260.0, 3035.0, 3270.0,
    1090.0, 1450.0, 1680.0, 3040.0, 3310.0, 3530.0,
    1090.0, 1460.0, 1675.0, 2285.0, 2750.0, 3025.0,
    1095.0, 1640.0, 2225.0, 2635.0, 3285.0, 3540.0,
    1105.0, 1535.0, 1910.0, 2565.0, 2815.0, 3030.0,
    1140.0, 1780.0, 2560.0, 2745.0, 2975.0, 3550.0,
    1145.0, 1380.0, 1640.0, 1915.0, 2725.0, 3325.0,
    1145.0, 1395.0, 1780.0, 2205.0, 2600.0, 3490.0,
    1165.0, 1925.0, 2250.0, 2520.0, 2690.0, 2875.0,
    1175.0, 2385.0, 2810.0, 3125.0, 3400.0, 3580.0,
    1215.0, 1520.0, 1815.0, 2035.0, 2355.0, 3125.0,
    1225.0, 2055.0, 2295.0, 3115.0, 3235.0, 3395.0,
    1235.0, 1530.0, 2290.0, 2545.0, 2945.0, 3470.0,
    1235.0, 2270.0, 2530.0, 2725.0, 2930.0, 3490.0,
    1240.0, 1465.0, 1950.0, 2795.0, 3035.0, 3440.0,
    1240.0, 1760.0, 2045.0, 2930.0, 3240.0, 3505.0,
    1255.0, 1470.0, 1675.0, 1920.0, 3055.0, 3435.0,
    1260.0, 2185.0, 2460.0, 2735.0, 3385.0, 3560.0,
    1265.0, 2430.0, 2635.0, 2830.0, 3085.0, 3275.0,
    1280.0, 1495.0, 1690.0, 1895.0, 2215.0, 2605.0,
    1285.0, 1920.0, 2220.0, 2615.0, 3155.0, 3515.0,
    1310.0, 1500.0, 1815.0, 2050.0, 3345.0, 3555.0,
    1315.0, 1590.0, 1820.0, 2400.0, 3255.0, 3495.0,
    1325.0, 1700.0, 1960.0, 2180.0, 2430.0, 2720.0,
    1325.0, 1930.0, 2265.0, 2530.0, 2805.0, 3165.0,
    1345.0, 1565.0, 1800.0, 2130.0, 2745.0, 3025.0,
    1360.0, 1625.0, 1830.0, 2555.0, 2835.0, 3465.0,
    1365.0, 1635.0, 2120.0, 2420.0, 2650.0, 3085.0,
    1365.0, 1700.0, 2880.0, 3205.0, 3430.0, 3560.0,
    1370.0, 1975.0, 2205.0, 2425.0, 2850.0, 3490.0,
    1385.0, 1580.0, 2205.0, 2605.0, 2925.0, 3140.0,
    1395.0, 2240.0, 2680.0, 2910.0, 3200.0, 3510.0,
    1400.0, 1620.0, 1830.0, 2100.0, 2615.0, 3465.0,
    1400.0, 1705.0, 2020.0, 2300.0, 2990.0, 3430.0,
    1405.0, 1725.0, 2065.0, 2330.0, 2560.0, 3425.0,
    1435.0, 2155.0, 2410.0, 2595.0, 2885.0, 3420.0,
    1440.0, 1785.0, 2365.0, 2705.0, 2965.0, 3335.0,
    1455.0, 1785.0, 2240.0, 3200.0, 3420.0, 3570.0,
    1465.0, 1920.0, 2640.0, 2930.0, 3130.0, 3320.0,
    1480.0, 1680.0, 2405.0, 2630.0, 3290.0, 3535.0,
    1485.0, 1815.0, 1965.0, 2295.0, 2830.0, 3130.0,
    1490.0, 1825.0, 2675.0, 3015.0, 3290.0, 3510.0,
    1525.0, 1805.0, 2060.0, 2325.0, 3355.0, 3560.0,
    1530.0, 2120.0, 2455.0, 2835.0, 3095.0, 3565.0,
    1545.0, 1925.0, 2125.0, 2880.0, 3105.0, 3345.0,
    1575.0, 1830.0, 2015.0, 2550.0, 2700.0, 2880.0,
    1640.0, 2080.0, 2375.0, 2560.0, 3195.0, 3405.0,
    1645.0, 2040.0, 2320.0, 2540.0, 2775.0, 3130.0,
    1660.0, 1865.0, 2085.0, 2475.0, 2760.0, 3485.0,
    1670.0, 2450.0, 2915.0, 3180.0, 3385.0, 3550.0,
    1685.0, 1985.0, 2175.0, 2360.0, 2575.0, 2880.0,
    1685.0, 2785.0, 3005.0, 3205.0, 3365.0, 3580.0,
    1705.0, 1855.0, 2060.0, 2505.0, 3115.0, 3355.0,
    1715.0, 2185.0, 2640.0, 2875.0, 3345.0, 3525.0,
    1730.0, 2475.0, 2650.0, 2845.0, 3075.0, 3355.0,
    1745.0, 2045.0, 2245.0, 2795.0, 3455.0, 3580.0,
    1750.0, 2125.0, 2465.0, 2705.0, 2905.0, 3225.0,
    1775.0, 2045.0, 2305.0, 3040.0, 3210.0, 3490.0,
    1840.0, 2090.0, 2375.0, 2605.0, 2795.0, 3530.0,
    1920.0, 2130.0, 2725.0, 2995.0, 3205.0, 3440.0,
    1985.0, 2215.0, 2445.0, 2645.0, 3315.0, 3505.0,
    2015.0, 2455.0, 2780.0, 3010.0, 3205.0, 3500.0,
    2030.0, 2315.0, 2500.0, 2750.0, 2970.0, 3255.0,
    2165.0, 2345.0, 2520.0, 2890.0, 3235.0, 3510.0,
    2245.0, 2555.0, 2735.0, 2860.0, 3045.0, 3330.0,
    2355.0, 2700.0, 2870.0, 3135.0, 3400.0, 3570.0,
];

// LSPs 5..10 (radians), 6 dimensional, searched with spacing dependent weights
static LSP_VQ: [Scaler; 768] = [
    0.7069, 0.8600, 1.8889, 2.2148, 2.4819, 2.7136,
    0.7108, 0.8325, 1.0210, 1.9124, 2.1677, 2.6861,
    0.7147, 0.9425, 1.6415, 1.9399, 2.4190, 2.6507,
    0.7186, 0.8325, 1.6650, 2.0774, 2.2737, 2.5054,
    0.7265, 0.8993, 1.3509, 1.8300, 2.6389, 2.7921,
    0.7304, 0.8600, 1.0249, 1.3391, 1.9007, 2.6586,
    0.7304, 0.8757, 1.0917, 1.7082, 1.9439, 2.1245,
    0.7343, 0.8718, 1.3784, 1.6297, 2.0538, 2.3680,
    0.7343, 0.9778, 2.1049, 2.3680, 2.5840, 2.7842,
    0.7422, 0.8993, 1.5433, 2.3444, 2.5565, 2.7371,
    0.7422, 0.9032, 1.1192, 1.3587, 1.7200, 2.1324,
    0.7461, 0.8561, 0.9700, 1.1270, 1.5355, 2.0342,
    0.7461, 0.9346, 1.1270, 2.2619, 2.5211, 2.7293,
    0.7461, 1.4608, 1.7004, 2.1009, 2.3640, 2.5133,
    0.7501, 0.9346, 1.1702, 1.7829, 2.5015, 2.7096,
    0.7501, 1.4176, 1.9635, 2.2345, 2.3994, 2.7528,
    0.7540, 1.1428, 1.4373, 1.7514, 2.1873, 2.4347,
    0.7540, 1.2881, 1.5158, 1.7004, 1.9282, 2.4072,
    0.7540, 1.6690, 1.8535, 2.0656, 2.4072, 2.7607,
    0.7579, 1.3077, 1.5669, 1.7946, 2.3719, 2.7528,
    0.7618, 0.9386, 1.0917, 1.2763, 2.3091, 2.6036,
    0.7618, 1.0092, 1.2959, 1.9949, 2.3051, 2.4701,
    0.7618, 1.1074, 1.3627, 1.6376, 2.2345, 2.7489,
    0.7618, 1.4216, 1.7946, 2.3405, 2.6114, 2.7882,
    0.7658, 0.9071, 1.0564, 1.2370, 1.5158, 2.6664,
    0.7658, 0.9543, 1.3391, 1.8535, 2.0931, 2.7096,
    0.7658, 0.9582, 1.1153, 1.2723, 1.4373, 1.7082,
    0.7658, 1.0328, 1.6218, 1.8378, 2.0813, 2.7175,
    0.7658, 1.1349, 1.6061, 1.7946, 1.9321, 2.0813,
    0.7697, 1.5040, 1.8850, 2.0067, 2.1520, 2.3091,
    0.7736, 0.9425, 1.1388, 1.3902, 2.5643, 2.7921,
    0.7736, 0.9739, 1.5708, 2.1127, 2.3091, 2.7725,
    0.7736, 1.2409, 1.9399, 2.1324, 2.5329, 2.7764,
    0.7775, 0.9503, 1.4098, 1.5472, 2.3287, 2.5840,
    0.7775, 0.9975, 1.1860, 1.5276, 2.1049, 2.3051,
    0.7775, 1.0760, 1.8143, 2.5172, 2.6704, 2.8117,
    0.7775, 1.4176, 1.7789, 1.9713, 2.1245, 2.6272,
    0.7815, 0.9464, 1.1153, 1.2841, 1.9596, 2.3523,
    0.7815, 1.0524, 1.6179, 1.8575, 2.6272, 2.7882,
    0.7854, 0.9660, 1.7946, 2.1284, 2.6821, 2.7960,
    0.7854, 1.0249, 1.7946, 1.9674, 2.1441, 2.4504,
    0.7854, 1.3195, 1.9399, 2.1716, 2.3798, 2.5447,
    0.7893, 0.9464, 1.1428, 1.6533, 2.2894, 2.5800,
    0.7893, 1.0249, 1.2645, 1.5394, 1.7632, 2.1049,
    0.7933, 1.0053, 1.2645, 1.4687, 1.6415, 1.8692,
    0.7933, 1.0132, 1.2881, 1.4844, 1.7789, 2.7096,
    0.7933, 1.0642, 1.5001, 1.9124, 2.0499, 2.3169,
    0.7933, 1.0721, 2.0303, 2.1913, 2.3994, 2.6272,
    0.7933, 1.4176, 1.6965, 1.9831, 2.6114, 2.7960,
    0.7933, 1.9831, 2.1913, 2.4662, 2.6586, 2.7999,
    0.8011, 0.9975, 2.3483, 2.5604, 2.6625, 2.7960,
    0.8011, 1.1388, 1.3312, 1.5472, 2.5761, 2.7803,
    0.8090, 1.1231, 1.2606, 1.4491, 2.3680, 2.5525,
    0.8090, 1.4294, 2.2227, 2.4387, 2.5879, 2.7685,
    0.8129, 1.6376, 1.7907, 2.0538, 2.1873, 2.5879,
    0.8168, 1.0328, 1.2252, 1.8143, 2.0106, 2.3994,
    0.8168, 1.1742, 1.5080, 2.1245, 2.4701, 2.7371,
    0.8168, 1.4530, 1.5983, 1.7593, 2.0538, 2.7332,
    0.8247, 1.0092, 1.1938, 1.3941, 1.5708, 2.4072,
    0.8286, 1.0367, 1.2370, 2.1284, 2.3444, 2.7096,
    0.8364, 1.0014, 1.1977, 1.5355, 2.0617, 2.7371,
    0.8443, 1.0799, 1.2841, 1.5315, 1.8261, 2.4190,
    0.8482, 1.2291, 1.4412, 1.6729, 1.8850, 2.7882,
    0.8522, 1.3273, 1.5826, 2.0617, 2.2855, 2.7882,
    0.8561, 1.5983, 1.9360, 2.4387, 2.6821, 2.8314,
    0.8600, 1.3902, 1.5904, 2.2816, 2.4858, 2.6900,
    0.8679, 1.1310, 1.8182, 2.2777, 2.4897, 2.7332,
    0.8718, 1.1035, 1.4176, 1.6650, 1.9242, 2.1363,
    0.8718, 1.6297, 1.8457, 2.2541, 2.4662, 2.7136,
    0.8718, 1.8653, 2.0263, 2.2305, 2.3758, 2.6272,
    0.8836, 1.0878, 1.4962, 1.7357, 2.3680, 2.6861,
    0.8914, 1.2527, 1.5276, 2.3444, 2.6232, 2.8039,
    0.8954, 1.1231, 1.3234, 2.0067, 2.6389, 2.7921,
    0.9071, 1.3705, 1.5983, 1.7593, 2.0695, 2.2541,
    0.9111, 1.1820, 2.0224, 2.3640, 2.6193, 2.8039,
    0.9111, 1.3077, 1.6061, 1.7750, 2.3248, 2.5329,
    0.9150, 1.2213, 1.4962, 1.8614, 2.0970, 2.7371,
    0.9189, 1.4883, 1.8182, 1.9949, 2.4347, 2.6232,
    0.9386, 1.7750, 2.0852, 2.2737, 2.5486, 2.7960,
    0.9425, 1.1977, 1.4137, 1.6493, 1.9713, 2.5722,
    0.9464, 1.2488, 1.4373, 1.5865, 1.7632, 1.9556,
    0.9543, 1.1113, 1.3195, 2.3955, 2.5525, 2.7685,
    0.9582, 1.3784, 1.5669, 2.0774, 2.2109, 2.3523,
    0.9621, 1.1467, 1.5040, 2.0970, 2.3287, 2.5643,
    0.9857, 1.6022, 1.7750, 1.9439, 2.1756, 2.4033,
    0.9896, 1.1938, 1.8496, 2.1206, 2.3248, 2.6743,
    0.9935, 1.8103, 2.3248, 2.5054, 2.6939, 2.7803,
    0.9975, 1.3038, 1.4923, 1.6415, 2.6350, 2.7960,
    1.0014, 1.2370, 1.4137, 1.8850, 2.3955, 2.7293,
    1.0092, 1.2763, 2.1598, 2.3248, 2.5133, 2.7450,
    1.0092, 1.5983, 1.7829, 1.9517, 2.4583, 2.7685,
    1.0171, 1.1860, 1.6101, 1.9007, 2.1049, 2.3444,
    1.0171, 1.2056, 1.4216, 1.6415, 2.0970, 2.3287,
    1.0171, 1.2723, 1.4412, 1.6022, 1.7554, 2.4936,
    1.0289, 1.2449, 1.8064, 2.0067, 2.2345, 2.5015,
    1.0446, 1.2252, 1.7357, 1.9282, 2.5525, 2.7489,
    1.0603, 1.2056, 1.3352, 1.8771, 2.0931, 2.5368,
    1.0681, 1.4451, 1.7004, 1.8967, 2.1598, 2.7293,
    1.0721, 1.2017, 1.4019, 1.6061, 1.9321, 2.8274,
    1.0760, 1.3038, 1.4491, 1.6729, 1.8457, 2.1677,
    1.0799, 1.4294, 1.6965, 2.2777, 2.4504, 2.6586,
    1.0799, 1.9635, 2.2148, 2.3405, 2.5408, 2.7253,
    1.0878, 1.3352, 2.2502, 2.5329, 2.6704, 2.7960,
    1.0917, 1.3744, 1.9242, 2.2305, 2.5840, 2.7410,
    1.0996, 1.4923, 1.9949, 2.1481, 2.3287, 2.5761,
    1.1035, 1.2802, 1.4373, 1.6376, 2.2659, 2.6350,
    1.1310, 1.3627, 2.2030, 2.3640, 2.4465, 2.5447,
    1.1388, 1.6493, 1.9203, 2.0852, 2.1991, 2.7450,
    1.1506, 1.3509, 1.5512, 2.0381, 2.3012, 2.6429,
    1.2056, 1.4137, 1.6258, 1.8025, 2.1481, 2.3169,
    1.2056, 1.4412, 1.7514, 2.5643, 2.7057, 2.8274,
    1.2134, 1.4176, 1.6376, 1.8261, 2.4740, 2.7646,
    1.2213, 1.3784, 1.5472, 2.2894, 2.5683, 2.7842,
    1.2252, 1.4019, 1.6140, 1.7711, 1.9792, 2.6861,
    1.2370, 1.7868, 2.0303, 2.2305, 2.3994, 2.6389,
    1.2645, 1.6611, 1.8771, 2.0892, 2.6468, 2.8078,
    1.2920, 1.5433, 2.0145, 2.2737, 2.5211, 2.7764,
    1.3155, 1.5826, 1.7868, 2.0263, 2.1756, 2.3523,
    1.3312, 1.5394, 1.7200, 2.1638, 2.3915, 2.5251,
    1.3391, 2.1009, 2.3169, 2.4897, 2.6586, 2.7882,
    1.3509, 1.5747, 1.7593, 1.9556, 2.2619, 2.6114,
    1.3587, 1.5315, 1.6965, 1.8418, 1.9871, 2.2187,
    1.3744, 1.6415, 2.1952, 2.4112, 2.5918, 2.7410,
    1.4569, 1.6336, 1.8692, 2.0735, 2.3366, 2.7528,
    1.4883, 1.6808, 1.8457, 2.4308, 2.6429, 2.7921,
    1.5551, 1.8653, 2.1245, 2.3601, 2.5800, 2.7450,
    1.6101, 1.8025, 1.9792, 2.1991, 2.3837, 2.6193,
    1.8457, 2.0538, 2.2345, 2.4465, 2.6193, 2.7921,
];

// frame to frame change of LSPs 1..4 (hz), entry 0 is no change
static LSP_DT_LOW: [Scaler; 128] = [
    0.0, 0.0, 0.0, 0.0,
    0.0, -45.0, -5.0, -25.0,
    -50.0, 75.0, 55.0, -20.0,
    10.0, 10.0, 75.0, 105.0,
    45.0, 50.0, 80.0, 5.0,
    85.0, -55.0, -15.0, -85.0,
    45.0, 0.0, -90.0, -25.0,
    -15.0, -55.0, 35.0, -100.0,
    45.0, -105.0, 5.0, 25.0,
    -80.0, 0.0, 50.0, 65.0,
    20.0, -25.0, 55.0, 30.0,
    10.0, -25.0, -25.0, 70.0,
    -35.0, 20.0, -85.0, 45.0,
    100.0, -15.0, -55.0, 30.0,
    90.0, 5.0, 40.0, 85.0,
    -30.0, 85.0, -35.0, 10.0,
    40.0, 85.0, 0.0, -45.0,
    -115.0, 0.0, 30.0, -80.0,
    -55.0, -80.0, 45.0, -15.0,
    -30.0, 10.0, 90.0, -45.0,
    80.0, 10.0, 20.0, -10.0,
    -10.0, 50.0, 10.0, 65.0,
    55.0, 25.0, 25.0, -115.0,
    55.0, -50.0, 90.0, -30.0,
    -85.0, -40.0, -35.0, 10.0,
    5.0, -75.0, -85.0, 45.0,
    -15.0, 15.0, -25.0, -75.0,
    -55.0, 65.0, -95.0, -70.0,
    55.0, 85.0, -40.0, 40.0,
    -40.0, -65.0, -65.0, -75.0,
    -40.0, -90.0, 55.0, 70.0,
    -100.0, 30.0, -15.0, 10.0,
];

// frame to frame change of LSPs 5..10 (hz), entry 0 is no change
static LSP_DT_HIGH: [Scaler; 192] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    45.0, 20.0, -120.0, 5.0, -70.0, 0.0,
    130.0, -65.0, 75.0, -100.0, -15.0, -30.0,
    95.0, 0.0, -90.0, -60.0, 45.0, 50.0,
    30.0, -60.0, 95.0, -15.0, 40.0, -70.0,
    -10.0, 75.0, -10.0, -140.0, -35.0, 0.0,
    -70.0, -5.0, 40.0, 90.0, 25.0, 80.0,
    0.0, 135.0, -15.0, 25.0, -25.0, 5.0,
    -15.0, -40.0, 35.0, -5.0, 140.0, 45.0,
    50.0, 15.0, 80.0, 70.0, -80.0, -50.0,
    -45.0, -60.0, 110.0, -45.0, -55.0, 25.0,
    -85.0, 35.0, -65.0, 85.0, -20.0, -60.0,
    -85.0, 30.0, -90.0, -40.0, 45.0, 40.0,
    20.0, 90.0, 115.0, -85.0, -50.0, -50.0,
    -120.0, 20.0, 15.0, 10.0, -95.0, 5.0,
    -80.0, 65.0, 45.0, -75.0, 60.0, -50.0,
    -45.0, -110.0, 45.0, 85.0, -25.0, -70.0,
    20.0, -45.0, -15.0, -115.0, 20.0, 90.0,
    -10.0, -70.0, -60.0, -60.0, -65.0, -60.0,
    70.0, 65.0, -55.0, 15.0, 25.0, -105.0,
    70.0, -35.0, -25.0, -40.0, 90.0, -50.0,
    -45.0, 65.0, -10.0, -25.0, -65.0, -125.0,
    -45.0, 85.0, 100.0, 60.0, 85.0, -15.0,
    -130.0, -95.0, -40.0, -60.0, 5.0, -30.0,
    -50.0, -120.0, -60.0, 40.0, 25.0, 35.0,
    65.0, -85.0, -15.0, 80.0, -35.0, 70.0,
    40.0, 60.0, 90.0, -40.0, 10.0, 105.0,
    15.0, -15.0, -50.0, 125.0, 90.0, -45.0,
    35.0, -5.0, -10.0, -35.0, -130.0, 60.0,
    -20.0, 45.0, -75.0, 70.0, -45.0, 120.0,
    -60.0, -35.0, -15.0, -25.0, 75.0, -115.0,
    130.0, 30.0, 5.0, 60.0, 20.0, 35.0,
];

/// One scalar codebook per LSP
pub static LSP_CB: [Codebook; 10] = [
    Codebook::new(1, &LSP1),
    Codebook::new(1, &LSP2),
    Codebook::new(1, &LSP3),
    Codebook::new(1, &LSP4),
    Codebook::new(1, &LSP5),
    Codebook::new(1, &LSP6),
    Codebook::new(1, &LSP7),
    Codebook::new(1, &LSP8),
    Codebook::new(1, &LSP9),
    Codebook::new(1, &LSP10),
];

/// Scalar codebooks for the differences between LSPs 1..4
pub static LSP_CBD: [Codebook; 4] = [
    Codebook::new(1, &DLSP1),
    Codebook::new(1, &DLSP2),
    Codebook::new(1, &DLSP3),
    Codebook::new(1, &DLSP4),
];

/// Scalar codebooks for LSPs 1..4 followed by the LSP 5..10 vector codebook
pub static LSP_CBJND: [Codebook; 5] = [
    Codebook::new(1, &JND1),
    Codebook::new(1, &JND2),
    Codebook::new(1, &JND3),
    Codebook::new(1, &JND4),
    Codebook::new(6, &LSP_JND_VQ),
];

pub static LSP_CBVQ: Codebook = Codebook::new(6, &LSP_VQ);

pub static LSP_CBDT: [Codebook; 2] = [Codebook::new(4, &LSP_DT_LOW), Codebook::new(6, &LSP_DT_HIGH)];
